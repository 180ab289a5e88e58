use super::srt::Caption;

/// Replace every line break in `text` with a single space. `\r\n` counts as one break.
pub fn single_line(text: &str) -> String {
    text.replace("\r\n", " ").replace(['\r', '\n'], " ")
}

/// Join the single-line texts of `captions` with one space between neighbours.
pub fn join_captions(captions: &[Caption]) -> String {
    captions
        .iter()
        .map(|caption| single_line(&caption.text))
        .collect::<Vec<_>>()
        .join(" ")
}
