use std::collections::VecDeque;

use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

/// Line-oriented user input shared by the shell and the timer screen.
///
/// Stdin is wrapped once so neither reader loses lines buffered by the
/// other. `next_line` is cancel safe and can sit in a `tokio::select!`.
pub enum LineInput {
    Stdin(Option<Lines<BufReader<Stdin>>>),
    Scripted(VecDeque<String>),
}

impl LineInput {
    #[must_use]
    pub const fn stdin() -> Self {
        Self::Stdin(None)
    }

    /// Fixed input, one entry per line.
    #[must_use]
    pub fn scripted<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Scripted(lines.into_iter().map(Into::into).collect())
    }

    /// Next line without its newline, or `None` at end of input.
    pub async fn next_line(&mut self) -> anyhow::Result<Option<String>> {
        match self {
            Self::Stdin(lines) => {
                let lines = lines.get_or_insert_with(|| BufReader::new(tokio::io::stdin()).lines());
                Ok(lines.next_line().await?)
            }
            Self::Scripted(queue) => Ok(queue.pop_front()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::LineInput;

    #[tokio::test]
    async fn scripted_input_drains_in_order() {
        let mut input = LineInput::scripted(["one", "two"]);
        assert_eq!(input.next_line().await.unwrap().as_deref(), Some("one"));
        assert_eq!(input.next_line().await.unwrap().as_deref(), Some("two"));
        assert_eq!(input.next_line().await.unwrap(), None);
    }
}
