use super::line::Line;

/// lazy splitter over one file's contents. yields one block of text per
/// hand, each beginning at a hand-start marker on its own line. anything
/// before the first marker is dropped silently. single forward pass, no
/// allocation, no validation of block contents.
pub struct Blocks<'a> {
    text: &'a str,
}

impl<'a> Blocks<'a> {
    /// next hand-start marker at a line boundary, at or after `from`.
    fn boundary(text: &str, from: usize) -> Option<usize> {
        text.get(from..)?
            .match_indices(Line::HAND_START)
            .map(|(i, _)| from + i)
            .find(|&i| i == 0 || text.as_bytes()[i - 1] == b'\n')
    }
}

impl<'a> From<&'a str> for Blocks<'a> {
    fn from(text: &'a str) -> Self {
        match Self::boundary(text, 0) {
            Some(start) => Self { text: &text[start..] },
            None => Self { text: "" },
        }
    }
}

impl<'a> Iterator for Blocks<'a> {
    type Item = &'a str;
    fn next(&mut self) -> Option<Self::Item> {
        if self.text.is_empty() {
            return None;
        }
        match Self::boundary(self.text, Line::HAND_START.len()) {
            Some(next) => {
                let block = &self.text[..next];
                self.text = &self.text[next..];
                Some(block)
            }
            None => {
                let block = self.text;
                self.text = "";
                Some(block)
            }
        }
    }
}
