//! Input forms accepted by the validator.

use std::borrow::Cow;

/// A value that can be handed to the validator.
///
/// Text is taken as-is. Integers are rendered to their decimal string, so
/// leading zeros are never restored (`1010107_i64` is not `"0001010107"`).
/// `None` stands for an absent value.
pub trait Candidate {
    /// Returns the text form of the value, or `None` when it is absent.
    fn render(&self) -> Option<Cow<'_, str>>;
}

impl Candidate for str {
    fn render(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self))
    }
}

impl Candidate for String {
    fn render(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self.as_str()))
    }
}

impl Candidate for i64 {
    fn render(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Owned(self.to_string()))
    }
}

impl Candidate for u64 {
    fn render(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Owned(self.to_string()))
    }
}

impl<T: Candidate + ?Sized> Candidate for &T {
    fn render(&self) -> Option<Cow<'_, str>> {
        (**self).render()
    }
}

impl<T: Candidate> Candidate for Option<T> {
    fn render(&self) -> Option<Cow<'_, str>> {
        self.as_ref().and_then(|value| value.render())
    }
}
