/// Interaction mode. Search tracks the seed constant under the pointer;
/// zoom freezes the seed and drives the two-click rectangle selection.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Search,
    Zoom,
}

impl Mode {
    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            Mode::Search => "search",
            Mode::Zoom => "zoom",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mode_is_search() {
        assert_eq!(Mode::default(), Mode::Search);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Mode::Search.display_name(), "search");
        assert_eq!(Mode::Zoom.display_name(), "zoom");
    }
}
