//! Inline emphasis used in the whitepaper copy: `**bold**` and `[highlight]`.

use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Emphasis {
    Plain,
    Bold,
    Highlight,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Span<'a> {
    pub text: &'a str,
    pub emphasis: Emphasis,
}

/// Splits `text` into styled spans. An opening marker without its closing
/// counterpart is kept as plain text.
pub fn spans(text: &str) -> Vec<Span<'_>> {
    let mut out = Vec::new();
    let mut rest = text;

    while !rest.is_empty() {
        let bold = rest.find("**");
        let highlight = rest.find('[');

        let (start, open, close, emphasis) = match (bold, highlight) {
            (Some(b), Some(h)) if h < b => (h, "[", "]", Emphasis::Highlight),
            (Some(b), _) => (b, "**", "**", Emphasis::Bold),
            (None, Some(h)) => (h, "[", "]", Emphasis::Highlight),
            (None, None) => break,
        };

        let inner_start = start + open.len();
        let Some(len) = rest[inner_start..].find(close) else {
            break;
        };

        push(&mut out, &rest[..start], Emphasis::Plain);
        push(&mut out, &rest[inner_start..inner_start + len], emphasis);
        rest = &rest[inner_start + len + close.len()..];
    }

    push(&mut out, rest, Emphasis::Plain);
    out
}

fn push<'a>(out: &mut Vec<Span<'a>>, text: &'a str, emphasis: Emphasis) {
    if !text.is_empty() {
        out.push(Span { text, emphasis });
    }
}

pub fn render(text: &str) -> Html {
    spans(text)
        .into_iter()
        .map(|span| match span.emphasis {
            Emphasis::Plain => html! { {span.text} },
            Emphasis::Bold => html! { <strong>{span.text}</strong> },
            Emphasis::Highlight => html! { <span class="highlight">{span.text}</span> },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(text: &str) -> Vec<(&str, Emphasis)> {
        spans(text).into_iter().map(|s| (s.text, s.emphasis)).collect()
    }

    #[test]
    fn plain_text_is_one_span() {
        assert_eq!(kinds("no markers"), vec![("no markers", Emphasis::Plain)]);
        assert!(spans("").is_empty());
    }

    #[test]
    fn bold_and_highlight_mix() {
        assert_eq!(
            kinds("over [970 million] people, only **25-30%** treated"),
            vec![
                ("over ", Emphasis::Plain),
                ("970 million", Emphasis::Highlight),
                (" people, only ", Emphasis::Plain),
                ("25-30%", Emphasis::Bold),
                (" treated", Emphasis::Plain),
            ]
        );
    }

    #[test]
    fn leading_marker_has_no_empty_plain_span() {
        assert_eq!(
            kinds("**85%** of attempts"),
            vec![("85%", Emphasis::Bold), (" of attempts", Emphasis::Plain)]
        );
    }

    #[test]
    fn unclosed_marker_stays_plain() {
        assert_eq!(kinds("a ** b"), vec![("a ** b", Emphasis::Plain)]);
        assert_eq!(kinds("[open"), vec![("[open", Emphasis::Plain)]);
    }
}
