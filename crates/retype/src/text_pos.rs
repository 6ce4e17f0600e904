use rowan::TextSize;

/// Line-start byte offsets of a source text, built once at parse time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    line_offsets: Vec<TextSize>,
    len: TextSize,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        Self {
            line_offsets: compute_line_offsets(text),
            len: TextSize::of(text),
        }
    }

    /// Number of lines. A newline that ends the text does not open another line.
    pub fn line_count(&self) -> u32 {
        self.line_offsets.len() as u32
    }

    /// 1-based line containing `offset`. Offsets past the end map to the last line.
    pub fn line_of(
        &self,
        offset: TextSize,
    ) -> u32 {
        let offset = offset.min(self.len);
        let line = match self.line_offsets.binary_search(&offset) {
            Ok(exact) => exact,
            Err(ins) => ins.saturating_sub(1),
        };
        line as u32 + 1
    }

    /// 1-based line and 1-based byte column of `offset`.
    pub fn line_col(
        &self,
        offset: TextSize,
    ) -> (u32, u32) {
        let line = self.line_of(offset);
        let line_start = self.line_offsets[(line - 1) as usize];
        (line, u32::from(offset.min(self.len) - line_start) + 1)
    }
}

fn compute_line_offsets(text: &str) -> Vec<TextSize> {
    let mut offsets = vec![TextSize::from(0)];
    for (i, byte) in text.bytes().enumerate() {
        if byte == b'\n' && i + 1 < text.len() {
            offsets.push(TextSize::from((i + 1) as u32));
        }
    }
    offsets
}

#[cfg(test)]
#[path = "../tests/src/text_pos_tests.rs"]
mod tests;
