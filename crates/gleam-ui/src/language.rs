//! Per-language display strings.
//!
//! Tables are compile-time constants. Every field of every table is used by
//! the renderer, so a blank entry is a programming error caught by the tests
//! below rather than something handled at runtime.

use gleam_core::Language;
use gleam_weather::LocationChoice;

#[derive(Debug)]
pub struct LanguageTable {
    pub app_name: &'static str,
    pub settings_label: &'static str,
    pub location_label: &'static str,
    /// Labels in [`LocationChoice::ALL`] order.
    pub location_choices: [&'static str; 5],
    pub city_prompt: &'static str,

    pub humidity: &'static str,
    pub uv: &'static str,
    pub wind: &'static str,
    pub feels_like: &'static str,

    pub outfit_heading: &'static str,
    pub drink_heading: &'static str,
    pub music_heading: &'static str,
    pub outfit: &'static str,
    pub drink_hot: &'static str,
    pub drink_cold: &'static str,
    pub playlist_label: &'static str,
    pub songs: &'static [&'static str],

    pub poem_sunny: &'static str,
    pub poem_rain: &'static str,
    pub poem_default: &'static str,
}

impl LanguageTable {
    pub fn location_choice_label(&self, choice: LocationChoice) -> &'static str {
        let idx = LocationChoice::ALL
            .iter()
            .position(|c| *c == choice)
            .unwrap_or(0);
        self.location_choices[idx]
    }
}

pub static KOREAN: LanguageTable = LanguageTable {
    app_name: "✨ 빛슬 웨더",
    settings_label: "⚙️ 설정",
    location_label: "위치 설정",
    location_choices: ["현재 위치", "대한민국", "일본", "미국", "직접 입력"],
    city_prompt: "도시 이름을 영어로 입력 후 엔터",

    humidity: "습도",
    uv: "자외선",
    wind: "풍속",
    feels_like: "체감 온도",

    outfit_heading: "👔 오늘의 착장",
    drink_heading: "🥤 추천 음료",
    music_heading: "🎧 추천 음악",
    outfit: "🧥 트렌치 코트 / 👖 슬랙스",
    drink_hot: "☕ 따뜻한 캐모마일",
    drink_cold: "🥤 아이스 얼그레이",
    playlist_label: "🎵 플레이리스트",
    songs: &["Day6 - 한 페이지가 될 수 있게", "아이유 - 밤편지"],

    poem_sunny: "창가에 부서지는 눈부신 윤슬처럼, 오늘 당신의 하루도 환하게 피어나길 바랍니다.\n\
가장 맑은 하늘의 색을 닮은 당신의 미소가 세상을 따뜻하게 비추고 있네요.\n\
햇살 아래 반짝이는 모든 순간들이 당신에게 기분 좋은 선물이 되어줄 거예요.",
    poem_rain: "낮게 가라앉은 하늘이 건네는 다정한 위로가 창가를 타고 흐르는 날입니다.\n\
토닥토닥 창문을 두드리는 빗소리에 마음의 먼지들을 조용히 씻어내 보세요.\n\
진한 차 한 잔의 온기처럼 당신의 마음도 평온하게 채워지길 소망합니다.",
    poem_default: "계절이 흐르고 날씨가 모습을 바꾸어도 당신이라는 이름의 반짝임은 시들지 않습니다.\n\
어떤 풍경 속에 있더라도 당신다운 편안함을 잃지 않기를 바랍니다.\n\
오늘도 당신의 아우라는 충분히 완벽합니다.",
};

pub static ENGLISH: LanguageTable = LanguageTable {
    app_name: "✨ Gleam Weather",
    settings_label: "⚙️ Settings",
    location_label: "Location",
    location_choices: [
        "Current Location",
        "South Korea",
        "Japan",
        "USA",
        "Direct Input",
    ],
    city_prompt: "Enter a city name in English",

    humidity: "Humidity",
    uv: "UV Index",
    wind: "Wind",
    feels_like: "Feels Like",

    outfit_heading: "👔 Daily Style",
    drink_heading: "🥤 Recommended Drink",
    music_heading: "🎧 Recommended Music",
    outfit: "🧥 Trench Coat / 👖 Slacks",
    drink_hot: "☕ Warm Chamomile Tea",
    drink_cold: "🥤 Iced Earl Grey",
    playlist_label: "🎵 Playlist",
    songs: &["Day6 - You Were Beautiful", "IU - Through the Night"],

    poem_sunny: "May your day blossom with light, just like the dazzling gleam on the water.\n\
Your smile, reflecting the clearest sky, warms the world around you.\n\
May every shimmering moment under the sun be a beautiful gift for you today.",
    poem_rain: "The low-hanging sky offers gentle comfort on this rainy day.\n\
Let the rhythm of the raindrops wash away the dust from your heart.\n\
May your soul be filled with peace, like the warmth of a hot cup of tea.",
    poem_default: "Even as seasons flow and the weather changes, your inner sparkle never fades.\n\
No matter what landscape you are in, I hope you stay true to your comfortable self.\n\
Your aura is already perfect just as it is.",
};

/// Table for a language.
pub fn table(language: Language) -> &'static LanguageTable {
    match language {
        Language::Korean => &KOREAN,
        Language::English => &ENGLISH,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_fields(t: &LanguageTable) -> Vec<(&'static str, &'static str)> {
        let mut fields = vec![
            ("app_name", t.app_name),
            ("settings_label", t.settings_label),
            ("location_label", t.location_label),
            ("city_prompt", t.city_prompt),
            ("humidity", t.humidity),
            ("uv", t.uv),
            ("wind", t.wind),
            ("feels_like", t.feels_like),
            ("outfit_heading", t.outfit_heading),
            ("drink_heading", t.drink_heading),
            ("music_heading", t.music_heading),
            ("outfit", t.outfit),
            ("drink_hot", t.drink_hot),
            ("drink_cold", t.drink_cold),
            ("playlist_label", t.playlist_label),
            ("poem_sunny", t.poem_sunny),
            ("poem_rain", t.poem_rain),
            ("poem_default", t.poem_default),
        ];
        fields.extend(t.location_choices.iter().map(|c| ("location_choices", *c)));
        fields.extend(t.songs.iter().map(|s| ("songs", *s)));
        fields
    }

    #[test]
    fn test_every_table_is_complete() {
        for lang in Language::ALL {
            let t = table(lang);
            for (name, value) in all_fields(t) {
                assert!(!value.trim().is_empty(), "{:?}.{} is empty", lang, name);
            }
            assert!(!t.songs.is_empty(), "{:?} has no songs", lang);
        }
    }

    #[test]
    fn test_poems_are_non_empty_multiline() {
        for lang in Language::ALL {
            let t = table(lang);
            for poem in [t.poem_sunny, t.poem_rain, t.poem_default] {
                assert!(!poem.is_empty());
                assert_eq!(poem.lines().count(), 3, "{:?} poem should have 3 lines", lang);
            }
        }
    }

    #[test]
    fn test_choice_labels_round_trip_through_location_parser() {
        for lang in Language::ALL {
            let t = table(lang);
            for choice in LocationChoice::ALL {
                let label = t.location_choice_label(choice);
                assert_eq!(LocationChoice::from_label(label), Some(choice), "label {}", label);
            }
        }
    }

    #[test]
    fn test_song_order_is_preserved() {
        assert_eq!(ENGLISH.songs[0], "Day6 - You Were Beautiful");
        assert_eq!(ENGLISH.songs[1], "IU - Through the Night");
        assert_eq!(KOREAN.songs[1], "아이유 - 밤편지");
    }

    #[test]
    fn test_tables_differ_by_language() {
        assert_ne!(table(Language::Korean).app_name, table(Language::English).app_name);
    }
}
