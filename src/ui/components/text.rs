use ratatui::prelude::*;

use crate::records::content::{parse_inline, ContentBlock};

use super::styles::{help_style, ACCENT};

/// Render a line of markdown-style text, honouring `**bold**` runs.
pub fn markdown_line(text: &str, base: Style) -> Line<'static> {
    let spans: Vec<Span<'static>> = parse_inline(text)
        .into_iter()
        .map(|run| {
            let style = if run.bold {
                base.add_modifier(Modifier::BOLD)
            } else {
                base
            };
            Span::styled(run.text, style)
        })
        .collect();
    Line::from(spans)
}

pub fn markdown_lines(text: &str, base: Style) -> Vec<Line<'static>> {
    text.lines().map(|line| markdown_line(line, base)).collect()
}

/// Lines for a sequence of static content blocks.
pub fn content_lines(blocks: &[ContentBlock], width: u16) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for block in blocks {
        match block {
            ContentBlock::Title(text) => {
                lines.push(Line::styled(
                    text.to_string(),
                    Style::default()
                        .fg(ACCENT)
                        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
                ));
                lines.push(Line::default());
            }
            ContentBlock::Header(text) => lines.push(Line::styled(
                text.to_string(),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )),
            ContentBlock::Subheader(text) => lines.push(Line::styled(
                text.to_string(),
                Style::default().fg(Color::Cyan),
            )),
            ContentBlock::Caption(text) => {
                lines.push(Line::styled(text.to_string(), help_style()));
                lines.push(Line::default());
            }
            ContentBlock::Code(text) => {
                for code_line in text.lines() {
                    lines.push(Line::styled(
                        format!("  {code_line}"),
                        Style::default().fg(Color::Green).bg(Color::Black),
                    ));
                }
                lines.push(Line::default());
            }
            ContentBlock::Text(text) => {
                lines.push(Line::raw(text.to_string()));
                lines.push(Line::default());
            }
            ContentBlock::Latex(expr) => {
                lines.push(Line::styled(
                    format!("    {expr}"),
                    Style::default().add_modifier(Modifier::ITALIC),
                ));
                lines.push(Line::default());
            }
            ContentBlock::Markdown(text) => {
                lines.extend(markdown_lines(text, Style::default()));
                lines.push(Line::default());
            }
            ContentBlock::Divider => {
                lines.push(Line::styled(
                    "─".repeat(width as usize),
                    Style::default().fg(Color::DarkGray),
                ));
            }
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bold_runs_get_bold_modifier() {
        let line = markdown_line("a **b** c", Style::default());
        assert_eq!(line.spans.len(), 3);
        assert!(line.spans[1].style.add_modifier.contains(Modifier::BOLD));
        assert!(!line.spans[0].style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn divider_spans_the_width() {
        let lines = content_lines(&[ContentBlock::Divider], 12);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].width(), 12);
    }
}
