pub const ABOUT_TITLE: &str = "Tentang Web Machine Learning";

pub const ABOUT_TEXT: &str = "Selamat datang di website kami yang membahas **Machine Learning** secara lengkap.\n\
Di sini Anda dapat menemukan berbagai artikel, tutorial,\n\
dan proyek menarik tentang Data Science dan Machine Learning.\n\
**Menu Navigasi:**";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Topic {
    #[default]
    Introduction,
    Algorithms,
    Projects,
    Resources,
}

impl Topic {
    pub const ALL: [Topic; 4] = [
        Topic::Introduction,
        Topic::Algorithms,
        Topic::Projects,
        Topic::Resources,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Topic::Introduction => "Pengantar ML",
            Topic::Algorithms => "Algoritma ML",
            Topic::Projects => "Proyek ML",
            Topic::Resources => "Sumber Belajar",
        }
    }

    pub fn info(self) -> &'static str {
        match self {
            Topic::Introduction => "Mengenal dasar-dasar Machine Learning dan konsep pentingnya.",
            Topic::Algorithms => {
                "Jelajahi berbagai algoritma populer seperti regresi, klasifikasi, dan clustering."
            }
            Topic::Projects => "Lihat contoh proyek nyata yang menggunakan teknik Machine Learning.",
            Topic::Resources => {
                "Daftar sumber belajar dan referensi terbaik untuk memperdalam ilmu ML."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_topic_has_distinct_info() {
        let infos: Vec<&str> = Topic::ALL.iter().map(|t| t.info()).collect();
        for (idx, info) in infos.iter().enumerate() {
            assert!(!info.is_empty());
            assert!(!infos[idx + 1..].contains(info));
        }
        assert_eq!(Topic::default(), Topic::Introduction);
    }
}
