/// Static display primitives of the welcome page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentBlock {
    Title(&'static str),
    Header(&'static str),
    Subheader(&'static str),
    Caption(&'static str),
    Code(&'static str),
    Text(&'static str),
    Latex(&'static str),
    Markdown(&'static str),
    Divider,
}

pub fn welcome_blocks() -> Vec<ContentBlock> {
    vec![
        ContentBlock::Title("SELAMAT DATANG DI APLIKASI DATA SHOWCASE"),
        ContentBlock::Header("Aplikasi Presentasi Data"),
        ContentBlock::Subheader("Mempelajari Data Science dan Machine Learning secara Praktis"),
        ContentBlock::Caption("Belajar menjadi lebih mudah dan menyenangkan!"),
        ContentBlock::Code("print('Halo, teman-teman! Selamat belajar!')"),
        ContentBlock::Text("Ini adalah contoh teks biasa untuk memperkaya tampilan aplikasi."),
        ContentBlock::Latex(r"\int e^x \,dx = e^x + C"),
        ContentBlock::Markdown(
            "Selamat datang di aplikasi presentasi data ini!\n\
             Di sini, Anda bisa mempelajari konsep dasar **Data Science** dan **Machine Learning** \
             dengan cara yang interaktif dan sederhana.\n\
             Gunakan menu dan fungsi yang tersedia untuk menjelajahi dan memahami data secara menyenangkan.",
        ),
        ContentBlock::Divider,
    ]
}

/// A run of markdown text, bold or plain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineRun {
    pub text: String,
    pub bold: bool,
}

/// Split one line on `**` markers. An unmatched trailing marker is kept literally.
pub fn parse_inline(line: &str) -> Vec<InlineRun> {
    let parts: Vec<&str> = line.split("**").collect();
    let closed = parts.len() % 2 == 1;
    let mut runs = Vec::new();

    for (idx, part) in parts.iter().enumerate() {
        let is_last = idx == parts.len() - 1;
        let bold = idx % 2 == 1 && (closed || !is_last);
        let text = if idx % 2 == 1 && !bold {
            format!("**{part}")
        } else {
            (*part).to_string()
        };
        if text.is_empty() {
            continue;
        }
        match runs.last_mut() {
            Some(InlineRun { text: prev, bold: prev_bold }) if *prev_bold == bold => {
                prev.push_str(&text)
            }
            _ => runs.push(InlineRun { text, bold }),
        }
    }
    runs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(text: &str, bold: bool) -> InlineRun {
        InlineRun {
            text: text.to_string(),
            bold,
        }
    }

    #[test]
    fn splits_bold_runs() {
        assert_eq!(
            parse_inline("konsep **Data Science** dan **ML**."),
            vec![
                run("konsep ", false),
                run("Data Science", true),
                run(" dan ", false),
                run("ML", true),
                run(".", false),
            ]
        );
    }

    #[test]
    fn unmatched_marker_stays_literal() {
        assert_eq!(
            parse_inline("total **Rp 5"),
            vec![run("total **Rp 5", false)]
        );
        assert_eq!(parse_inline(""), Vec::<InlineRun>::new());
    }

    #[test]
    fn welcome_starts_with_title_and_ends_with_divider() {
        let blocks = welcome_blocks();
        assert!(matches!(blocks.first(), Some(ContentBlock::Title(_))));
        assert_eq!(blocks.last(), Some(&ContentBlock::Divider));
    }
}
