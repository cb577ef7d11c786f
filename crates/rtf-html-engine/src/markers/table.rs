use super::kinds::{ContentEnd, SymbolControl, TabControl};

/// One specificity variant of the content-begin marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BeginMarker {
    /// Lower runs first. Later variants must textually extend earlier ones.
    priority: u8,
    pattern: String,
}

impl BeginMarker {
    pub fn new(priority: u8, pattern: impl Into<String>) -> Self {
        Self {
            priority,
            pattern: pattern.into(),
        }
    }

    pub fn priority(&self) -> u8 {
        self.priority
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

/// A style control sequence and the CSS classes it contributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleMarker {
    /// Lower runs first; combinations come before the singles they contain.
    priority: u8,
    pattern: String,
    classes: String,
}

impl StyleMarker {
    pub fn new(priority: u8, pattern: impl Into<String>, classes: impl Into<String>) -> Self {
        Self {
            priority,
            pattern: pattern.into(),
            classes: classes.into(),
        }
    }

    pub fn priority(&self) -> u8 {
        self.priority
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Space-separated class names, e.g. `rtf-bold rtf-italic`.
    pub fn classes(&self) -> &str {
        &self.classes
    }
}

/// HTML list container type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrapperKind {
    Ordered,
    Unordered,
}

impl WrapperKind {
    pub fn tag(self) -> &'static str {
        match self {
            WrapperKind::Ordered => "ol",
            WrapperKind::Unordered => "ul",
        }
    }
}

/// A list-number cue inside the control run that selects the wrapper kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrapperMarker {
    priority: u8,
    pattern: String,
    kind: WrapperKind,
}

impl WrapperMarker {
    pub fn new(priority: u8, pattern: impl Into<String>, kind: WrapperKind) -> Self {
        Self {
            priority,
            pattern: pattern.into(),
            kind,
        }
    }

    pub fn priority(&self) -> u8 {
        self.priority
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn kind(&self) -> WrapperKind {
        self.kind
    }
}

/// Markers that identify list items and their nesting level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListMarkers {
    /// Present in the control run of every list item.
    item: String,
    /// Level markers are `{level_prefix}{depth}`, e.g. `\ilvl1`.
    level_prefix: String,
    wrappers: Vec<WrapperMarker>,
    fallback: WrapperKind,
}

impl ListMarkers {
    /// RTF numbers list levels 0 through 8.
    pub const MAX_LEVEL: usize = 8;

    pub fn new(
        item: impl Into<String>,
        level_prefix: impl Into<String>,
        mut wrappers: Vec<WrapperMarker>,
        fallback: WrapperKind,
    ) -> Self {
        wrappers.sort_by_key(WrapperMarker::priority);
        Self {
            item: item.into(),
            level_prefix: level_prefix.into(),
            wrappers,
            fallback,
        }
    }

    pub fn item(&self) -> &str {
        &self.item
    }

    pub fn wrappers(&self) -> &[WrapperMarker] {
        &self.wrappers
    }

    /// Whether a control run marks its payload as a list item.
    pub fn is_item(&self, run: &str) -> bool {
        run.contains(self.item.as_str())
    }

    /// Level marker for a nesting depth, e.g. `\ilvl1` for depth 1.
    pub fn level_marker(&self, depth: usize) -> String {
        format!("{}{depth}", self.level_prefix)
    }

    /// Wrapper kind of the list whose first item carries this run.
    ///
    /// Wrapper markers are tried in priority order; the fallback applies when
    /// none matches.
    pub fn wrapper_for(&self, run: &str) -> WrapperKind {
        self.wrappers
            .iter()
            .find(|w| run.contains(w.pattern()))
            .map_or(self.fallback, WrapperMarker::kind)
    }

    /// Deepest level in `1..=max_depth` whose marker occurs in the run, or 0.
    pub fn depth_of(&self, run: &str, max_depth: usize) -> usize {
        (1..=max_depth.min(Self::MAX_LEVEL))
            .rev()
            .find(|depth| run.contains(&self.level_marker(*depth)))
            .unwrap_or(0)
    }
}

/// Immutable marker configuration shared by reference across the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerTable {
    begin: Vec<BeginMarker>,
    styles: Vec<StyleMarker>,
    list: ListMarkers,
    content_end: String,
    symbol_control: String,
    tab: String,
}

impl MarkerTable {
    /// Builds a table, ordering every family by its priority field.
    pub fn new(
        mut begin: Vec<BeginMarker>,
        mut styles: Vec<StyleMarker>,
        list: ListMarkers,
    ) -> Self {
        begin.sort_by_key(BeginMarker::priority);
        styles.sort_by_key(StyleMarker::priority);
        Self {
            begin,
            styles,
            list,
            content_end: ContentEnd::MARKER.to_string(),
            symbol_control: SymbolControl::MARKER.to_string(),
            tab: TabControl::MARKER.to_string(),
        }
    }

    /// The markers written by LibreOffice-style RTF exporters.
    pub fn rtf() -> Self {
        let begin = vec![
            BeginMarker::new(0, r"\rtlch \ltrch"),
            BeginMarker::new(1, r"\rtlch \ltrch\loch"),
        ];

        let styles = vec![
            StyleMarker::new(
                0,
                r"\i\ul\ulc0\b\ai\ab\rtlch",
                "rtf-bold rtf-italic rtf-underline",
            ),
            StyleMarker::new(1, r"\i\b\ai\ab\rtlch", "rtf-bold rtf-italic"),
            StyleMarker::new(2, r"\ul\ulc0\b\ab\rtlch", "rtf-bold rtf-underline"),
            StyleMarker::new(3, r"\i\ul\ulc0\ai\rtlch", "rtf-italic rtf-underline"),
            StyleMarker::new(4, r"\b\ab\rtlch", "rtf-bold"),
            StyleMarker::new(5, r"\i\ai\rtlch", "rtf-italic"),
            StyleMarker::new(6, r"\ul\ulc0\rtlch", "rtf-underline"),
        ];

        let list = ListMarkers::new(
            r"\listtext",
            r"\ilvl",
            vec![
                WrapperMarker::new(0, r"1.\tab", WrapperKind::Ordered),
                WrapperMarker::new(1, r"'3f\tab", WrapperKind::Unordered),
            ],
            WrapperKind::Unordered,
        );

        Self::new(begin, styles, list)
    }

    /// Begin variants, least specific first.
    pub fn begin_markers(&self) -> &[BeginMarker] {
        &self.begin
    }

    /// Style markers, most specific combination first.
    pub fn style_markers(&self) -> &[StyleMarker] {
        &self.styles
    }

    pub fn list_markers(&self) -> &ListMarkers {
        &self.list
    }

    pub fn content_end(&self) -> &str {
        &self.content_end
    }

    pub fn symbol_control(&self) -> &str {
        &self.symbol_control
    }

    pub fn tab(&self) -> &str {
        &self.tab
    }
}

impl Default for MarkerTable {
    fn default() -> Self {
        Self::rtf()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn families_are_ordered_by_priority_not_insertion() {
        let table = MarkerTable::new(
            vec![
                BeginMarker::new(1, r"\rtlch \ltrch\loch"),
                BeginMarker::new(0, r"\rtlch \ltrch"),
            ],
            vec![
                StyleMarker::new(9, r"\b", "bold"),
                StyleMarker::new(2, r"\b\i", "bold italic"),
            ],
            ListMarkers::new(
                r"\listtext",
                r"\ilvl",
                vec![
                    WrapperMarker::new(5, "*", WrapperKind::Unordered),
                    WrapperMarker::new(1, "1.", WrapperKind::Ordered),
                ],
                WrapperKind::Unordered,
            ),
        );

        assert_eq!(table.begin_markers()[0].pattern(), r"\rtlch \ltrch");
        assert_eq!(table.style_markers()[0].classes(), "bold italic");
        assert_eq!(
            table.list_markers().wrappers()[0].kind(),
            WrapperKind::Ordered
        );
    }

    #[test]
    fn begin_variants_extend_each_other() {
        let table = MarkerTable::rtf();
        for pair in table.begin_markers().windows(2) {
            assert!(pair[1].pattern().starts_with(pair[0].pattern()));
        }
    }

    #[test]
    fn builtin_styles_start_with_the_three_way_combination() {
        let table = MarkerTable::rtf();
        let classes: Vec<_> = table.style_markers().iter().map(|s| s.classes()).collect();
        assert_eq!(
            classes,
            vec![
                "rtf-bold rtf-italic rtf-underline",
                "rtf-bold rtf-italic",
                "rtf-bold rtf-underline",
                "rtf-italic rtf-underline",
                "rtf-bold",
                "rtf-italic",
                "rtf-underline",
            ]
        );
    }

    #[rstest]
    #[case(r"{\listtext\pard\plain 1.\tab}", WrapperKind::Ordered)]
    #[case(r"{\listtext\pard\plain \'3f\tab}", WrapperKind::Unordered)]
    #[case(r"{\listtext\pard\plain \'3f\tab 1.\tab}", WrapperKind::Ordered)]
    #[case(r"{\listtext\pard\plain a)}", WrapperKind::Unordered)]
    fn wrapper_kind_from_run(#[case] run: &str, #[case] expected: WrapperKind) {
        assert_eq!(MarkerTable::rtf().list_markers().wrapper_for(run), expected);
    }

    #[rstest]
    #[case(r"\listtext\ilvl0", 1, 0)]
    #[case(r"\listtext\ilvl1", 1, 1)]
    #[case(r"\listtext\ilvl2", 1, 0)]
    #[case(r"\listtext\ilvl2", 3, 2)]
    #[case(r"\listtext", 1, 0)]
    #[case(r"\listtext\ilvl8", 20, 8)]
    fn depth_of_run(#[case] run: &str, #[case] max_depth: usize, #[case] expected: usize) {
        let table = MarkerTable::rtf();
        assert_eq!(table.list_markers().depth_of(run, max_depth), expected);
    }

    #[test]
    fn is_item_checks_listtext() {
        let list = MarkerTable::rtf().list_markers().clone();
        assert!(list.is_item(r"\par \pard\plain {\listtext\pard\plain 1.\tab}"));
        assert!(!list.is_item(r"\par \pard\plain {\b\ab\rtlch"));
    }

    #[test]
    fn wrapper_tags() {
        assert_eq!(WrapperKind::Ordered.tag(), "ol");
        assert_eq!(WrapperKind::Unordered.tag(), "ul");
    }
}
