//! Substitution of `{header}`, `{body}`, `{icon}` and `{button}` into layout
//! templates.

use once_cell::sync::Lazy;
use regex::Regex;

static TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{(header|body|icon|button)\}").expect("valid token regex")
});

/// A rendered piece of an alert.
///
/// Block fragments (containers, the icon and the button) sit on their own
/// line; inline fragments are concatenated with whatever surrounds them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Fragment {
    pub html: String,
    pub block: bool,
}

impl Fragment {
    pub fn inline(html: String) -> Self {
        Self { html, block: false }
    }

    pub fn block(html: String) -> Self {
        Self { html, block: true }
    }

    pub fn is_empty(&self) -> bool {
        self.html.is_empty()
    }
}

#[derive(Clone, Debug, Default)]
pub struct Fragments {
    pub header: Fragment,
    pub body: Fragment,
    pub icon: Fragment,
    pub button: Fragment,
}

impl Fragments {
    fn get(&self, token: &str) -> &Fragment {
        match token {
            "header" => &self.header,
            "body" => &self.body,
            "icon" => &self.icon,
            "button" => &self.button,
            _ => unreachable!("token regex only matches known tokens"),
        }
    }
}

/// Replaces every known token in `template` with its fragment.
///
/// Absent fragments become the empty string. Anything else in the template,
/// including unknown `{tokens}`, is copied through untouched.
pub fn substitute(template: &str, fragments: &Fragments) -> String {
    let mut out = Lines::default();
    let mut last = 0;
    for caps in TOKEN.captures_iter(template) {
        let whole = caps.get(0).expect("group 0 always matches");
        out.push(&template[last..whole.start()], false);
        let fragment = fragments.get(&caps[1]);
        out.push(&fragment.html, fragment.block);
        last = whole.end();
    }
    out.push(&template[last..], false);
    out.buf
}

#[derive(Default)]
struct Lines {
    buf: String,
    prev_block: Option<bool>,
}

impl Lines {
    fn push(&mut self, html: &str, block: bool) {
        if html.is_empty() {
            return;
        }
        if let Some(prev_block) = self.prev_block {
            if prev_block || block {
                self.buf.push('\n');
            }
        }
        self.buf.push_str(html);
        self.prev_block = Some(block);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fragments() -> Fragments {
        Fragments {
            header: Fragment::inline("<h4>H</h4>".into()),
            body: Fragment::inline("<span>B</span>".into()),
            icon: Fragment::block("<div><i></i></div>".into()),
            button: Fragment::block("<button></button>".into()),
        }
    }

    #[test]
    fn blocks_go_on_their_own_line() {
        assert_eq!(
            substitute("{icon}{body}{button}", &fragments()),
            "<div><i></i></div>\n<span>B</span>\n<button></button>"
        );
    }

    #[test]
    fn inline_fragments_are_concatenated() {
        assert_eq!(
            substitute("{header}{body}", &fragments()),
            "<h4>H</h4><span>B</span>"
        );
    }

    #[test]
    fn only_requested_tokens_appear() {
        assert_eq!(substitute("{body}", &fragments()), "<span>B</span>");
    }

    #[test]
    fn missing_fragments_are_empty() {
        let fragments = Fragments {
            body: Fragment::inline("<span>B</span>".into()),
            ..Default::default()
        };
        assert_eq!(
            substitute("{icon}{body}{button}", &fragments),
            "<span>B</span>"
        );
    }

    #[test]
    fn unknown_tokens_stay_literal() {
        assert_eq!(
            substitute("{title}: {body}", &fragments()),
            "{title}: <span>B</span>"
        );
    }

    #[test]
    fn tokens_may_repeat() {
        assert_eq!(
            substitute("{body}|{body}", &fragments()),
            "<span>B</span>|<span>B</span>"
        );
    }
}
