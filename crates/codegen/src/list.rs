bitflags::bitflags! {
    /// How the children of a list are bracketed, separated and laid out.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ListFormat: u32 {
        /// One child per line, always.
        const MultiLine = 1 << 0;
        /// One line if it fits in the print width, one child per line
        /// otherwise.
        const Breakable = 1 << 1;
        /// One child per line if the source had a line break after the
        /// opening bracket.
        const PreserveLines = 1 << 2;
        /// Children of a broken list are indented.
        const Indented = 1 << 3;

        const CommaDelimited = 1 << 4;
        /// `;` between children on one line, after every child when broken.
        const SemicolonDelimited = 1 << 5;
        const BarDelimited = 1 << 6;
        const AmpersandDelimited = 1 << 7;
        const DelimitersMask = Self::CommaDelimited.bits()
            | Self::SemicolonDelimited.bits()
            | Self::BarDelimited.bits()
            | Self::AmpersandDelimited.bits();

        const SpaceBetweenSiblings = 1 << 8;
        /// Honors `bracket_spacing` on one line.
        const SpaceBetweenBraces = 1 << 9;

        const Braces = 1 << 10;
        const Parenthesis = 1 << 11;
        const AngleBrackets = 1 << 12;
        const SquareBrackets = 1 << 13;
        const BracketsMask = Self::Braces.bits()
            | Self::Parenthesis.bits()
            | Self::AngleBrackets.bits()
            | Self::SquareBrackets.bits();

        /// Trailing comma in a broken list unless `trailing_comma` is `none`.
        const TrailingCommaEs5 = 1 << 14;
        /// Trailing comma in a broken list when `trailing_comma` is `all`.
        const TrailingCommaAll = 1 << 15;

        const ObjectLiteralProperties = Self::Braces.bits()
            | Self::CommaDelimited.bits()
            | Self::SpaceBetweenSiblings.bits()
            | Self::SpaceBetweenBraces.bits()
            | Self::Breakable.bits()
            | Self::PreserveLines.bits()
            | Self::Indented.bits()
            | Self::TrailingCommaEs5.bits();
        const ObjectBindingPatternElements = Self::Braces.bits()
            | Self::CommaDelimited.bits()
            | Self::SpaceBetweenSiblings.bits()
            | Self::SpaceBetweenBraces.bits()
            | Self::Breakable.bits()
            | Self::Indented.bits()
            | Self::TrailingCommaEs5.bits();
        const ArrayLiteralExpressionElements = Self::SquareBrackets.bits()
            | Self::CommaDelimited.bits()
            | Self::SpaceBetweenSiblings.bits()
            | Self::Breakable.bits()
            | Self::Indented.bits()
            | Self::TrailingCommaEs5.bits();
        const ArrayBindingPatternElements = Self::SquareBrackets.bits()
            | Self::CommaDelimited.bits()
            | Self::SpaceBetweenSiblings.bits()
            | Self::Breakable.bits()
            | Self::Indented.bits();
        const CallExpressionArguments = Self::Parenthesis.bits()
            | Self::CommaDelimited.bits()
            | Self::SpaceBetweenSiblings.bits()
            | Self::Breakable.bits()
            | Self::Indented.bits()
            | Self::TrailingCommaAll.bits();
        const Parameters = Self::Parenthesis.bits()
            | Self::CommaDelimited.bits()
            | Self::SpaceBetweenSiblings.bits()
            | Self::Breakable.bits()
            | Self::Indented.bits()
            | Self::TrailingCommaAll.bits();
        const TypeParameters = Self::AngleBrackets.bits()
            | Self::CommaDelimited.bits()
            | Self::SpaceBetweenSiblings.bits()
            | Self::Breakable.bits()
            | Self::Indented.bits()
            | Self::TrailingCommaAll.bits();
        const TupleTypeElements = Self::SquareBrackets.bits()
            | Self::CommaDelimited.bits()
            | Self::SpaceBetweenSiblings.bits()
            | Self::Breakable.bits()
            | Self::Indented.bits()
            | Self::TrailingCommaAll.bits();
        const NamedImportsOrExportsElements = Self::Braces.bits()
            | Self::CommaDelimited.bits()
            | Self::SpaceBetweenSiblings.bits()
            | Self::SpaceBetweenBraces.bits()
            | Self::Breakable.bits()
            | Self::Indented.bits()
            | Self::TrailingCommaEs5.bits();
        const TypeLiteralMembers = Self::Braces.bits()
            | Self::SemicolonDelimited.bits()
            | Self::SpaceBetweenSiblings.bits()
            | Self::SpaceBetweenBraces.bits()
            | Self::Breakable.bits()
            | Self::PreserveLines.bits()
            | Self::Indented.bits();
        const InterfaceMembers = Self::Braces.bits()
            | Self::SemicolonDelimited.bits()
            | Self::MultiLine.bits()
            | Self::Indented.bits();
        const ClassMembers = Self::Braces.bits() | Self::MultiLine.bits() | Self::Indented.bits();
        const HeritageClauseTypes = Self::CommaDelimited.bits() | Self::SpaceBetweenSiblings.bits();
        const VariableDeclarationList =
            Self::CommaDelimited.bits() | Self::SpaceBetweenSiblings.bits();
        const SequenceExpressionElements =
            Self::CommaDelimited.bits() | Self::SpaceBetweenSiblings.bits();
        const UnionTypeConstituents = Self::BarDelimited.bits() | Self::SpaceBetweenSiblings.bits();
        const IntersectionTypeConstituents =
            Self::AmpersandDelimited.bits() | Self::SpaceBetweenSiblings.bits();
    }
}

impl ListFormat {
    pub fn opening_bracket(self) -> &'static str {
        if self.contains(ListFormat::Braces) {
            "{"
        } else if self.contains(ListFormat::Parenthesis) {
            "("
        } else if self.contains(ListFormat::AngleBrackets) {
            "<"
        } else if self.contains(ListFormat::SquareBrackets) {
            "["
        } else {
            ""
        }
    }

    pub fn closing_bracket(self) -> &'static str {
        if self.contains(ListFormat::Braces) {
            "}"
        } else if self.contains(ListFormat::Parenthesis) {
            ")"
        } else if self.contains(ListFormat::AngleBrackets) {
            ">"
        } else if self.contains(ListFormat::SquareBrackets) {
            "]"
        } else {
            ""
        }
    }
}
