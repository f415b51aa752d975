use regex::Regex;
use std::sync::OnceLock;

/// The parsed result of one interviewer response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Turn {
    /// Text spoken out loud. Empty when the `<falar>` tag is absent.
    pub spoken: String,
    /// Content shown on screen. Empty when the `<codigo>` tag is absent.
    pub screen_content: String,
}

fn falar_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)<falar>(.*?)</falar>").expect("valid regex"))
}

fn codigo_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)<codigo>(.*?)</codigo>").expect("valid regex"))
}

/// Extract the spoken and on-screen fields from a raw model response.
///
/// Pure text transform: multi-line content is allowed, the first matching
/// tag pair wins, extracted values are trimmed. A missing tag yields an
/// empty field — the model is only bound to the format by instruction, so
/// malformed output degrades instead of erroring.
pub fn parse_turn(raw: &str) -> Turn {
    let spoken = falar_re()
        .captures(raw)
        .map(|c| c[1].trim().to_string())
        .unwrap_or_default();

    let screen_content = codigo_re()
        .captures(raw)
        .map(|c| c[1].trim().to_string())
        .unwrap_or_default();

    Turn {
        spoken,
        screen_content,
    }
}
