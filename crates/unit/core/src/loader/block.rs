//! Tagged building-block records.
//!
//! A record is a sequence of `<Tag>` … `</Tag>` blocks holding one value per
//! line. Lines starting with `#` are comments and blank lines are ignored.
//!
//! ```text
//! <Name>
//! Rifle
//! </Name>
//! <Guns Equipment>
//! Improved SRM 2
//! Improved SRM 2 Ammo:Shots5#
//! </Guns Equipment>
//! ```

use super::error::LoadError;

/// Parsed record: ordered tags with their value lines.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BuildingBlock {
    blocks: Vec<(String, Vec<String>)>,
}

impl BuildingBlock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses record text.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Syntax` for values outside a block, nested or
    /// mismatched tags, and blocks left open at the end of input.
    pub fn parse(text: &str) -> Result<Self, LoadError> {
        let mut record = Self::new();
        let mut open: Option<(String, Vec<String>, usize)> = None;

        for (index, raw) in text.lines().enumerate() {
            let line_no = index + 1;
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some(tag) = line.strip_prefix("</").and_then(|rest| rest.strip_suffix('>')) {
                match open.take() {
                    Some((name, values, _)) if name.eq_ignore_ascii_case(tag.trim()) => {
                        record.blocks.push((name, values));
                    }
                    Some((name, _, _)) => {
                        return Err(LoadError::Syntax {
                            line: line_no,
                            message: format!("</{}> closes <{name}>", tag.trim()),
                        });
                    }
                    None => {
                        return Err(LoadError::Syntax {
                            line: line_no,
                            message: format!("</{}> without an open block", tag.trim()),
                        });
                    }
                }
                continue;
            }

            if let Some(tag) = line.strip_prefix('<').and_then(|rest| rest.strip_suffix('>')) {
                if let Some((name, _, opened)) = &open {
                    return Err(LoadError::Syntax {
                        line: line_no,
                        message: format!("<{}> opened inside <{name}> from line {opened}", tag.trim()),
                    });
                }
                open = Some((tag.trim().to_string(), Vec::new(), line_no));
                continue;
            }

            match open.as_mut() {
                Some((_, values, _)) => values.push(line.to_string()),
                None => {
                    return Err(LoadError::Syntax {
                        line: line_no,
                        message: format!("value '{line}' outside of any block"),
                    });
                }
            }
        }

        if let Some((name, _, opened)) = open {
            return Err(LoadError::Syntax {
                line: opened,
                message: format!("<{name}> is never closed"),
            });
        }
        Ok(record)
    }

    /// Adds or replaces a block.
    pub fn insert<I, S>(&mut self, tag: impl Into<String>, values: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tag = tag.into();
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        match self.position(&tag) {
            Some(index) => self.blocks[index].1 = values,
            None => self.blocks.push((tag, values)),
        }
        self
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with<I, S>(mut self, tag: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.insert(tag, values);
        self
    }

    fn position(&self, tag: &str) -> Option<usize> {
        self.blocks
            .iter()
            .position(|(name, _)| name.eq_ignore_ascii_case(tag))
    }

    pub fn exists(&self, tag: &str) -> bool {
        self.position(tag).is_some()
    }

    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.blocks.iter().map(|(name, _)| name.as_str())
    }

    pub fn strings(&self, tag: &str) -> Option<&[String]> {
        self.position(tag).map(|index| self.blocks[index].1.as_slice())
    }

    pub fn first_string(&self, tag: &str) -> Option<&str> {
        self.strings(tag)?.first().map(String::as_str)
    }

    /// Whitespace-separated integers across every line of the block.
    pub fn ints(&self, tag: &str) -> Result<Option<Vec<i32>>, LoadError> {
        let Some(lines) = self.strings(tag) else {
            return Ok(None);
        };
        lines
            .iter()
            .flat_map(|line| line.split_whitespace())
            .map(|token| {
                token.parse::<i32>().map_err(|_| LoadError::InvalidInteger {
                    block: tag.to_string(),
                    value: token.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Some)
    }

    pub fn first_int(&self, tag: &str) -> Result<Option<i32>, LoadError> {
        Ok(self.ints(tag)?.and_then(|values| values.first().copied()))
    }
}
