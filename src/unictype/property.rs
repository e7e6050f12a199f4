// unictype/property.rs - Binary character properties.
//
// A property is a plain enum value; uc_is_property dispatches on where the
// property's data lives (its own 1-bit trie, the general category, the bidi
// class or the numeric type). The uc_is_property_* functions are shorthands
// for the most common properties.

use super::bidi::{uc_bidi_class, UcBidiClass};
use super::categ::{uc_is_general_category, UcGeneralCategory};
use super::names;
use super::numeric::has_numeric_type;
use super::tables::*;
use super::trie::Trie;
use crate::unitypes::Ucs4;

/// A binary character property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UcProperty {
    // PropList.txt / DerivedCoreProperties.txt / emoji-data.txt
    WhiteSpace,
    Alphabetic,
    Lowercase,
    Uppercase,
    Cased,
    CaseIgnorable,
    Math,
    HexDigit,
    AsciiHexDigit,
    Ideographic,
    UnifiedIdeograph,
    Radical,
    IdsBinaryOperator,
    IdsTrinaryOperator,
    Dash,
    Hyphen,
    QuotationMark,
    TerminalPunctuation,
    SentenceTerminal,
    Diacritic,
    Extender,
    DefaultIgnorableCodePoint,
    BidiControl,
    BidiMirrored,
    JoinControl,
    SoftDotted,
    VariationSelector,
    NoncharacterCodePoint,
    IdStart,
    IdContinue,
    XidStart,
    XidContinue,
    PatternSyntax,
    PatternWhiteSpace,
    GraphemeBase,
    GraphemeExtend,
    LogicalOrderException,
    Deprecated,
    PrependedConcatenationMark,
    RegionalIndicator,
    Emoji,
    EmojiPresentation,
    EmojiModifier,
    EmojiModifierBase,
    EmojiComponent,
    ExtendedPictographic,
    ChangesWhenLowercased,
    ChangesWhenUppercased,
    ChangesWhenTitlecased,
    ChangesWhenCasefolded,
    ChangesWhenCasemapped,

    // Derived from the general category
    Titlecase,
    Combining,
    DecimalDigit,
    Punctuation,
    CurrencySymbol,
    MathSymbol,
    IsoControl,
    FormatControl,
    PrivateUse,
    UnassignedCodeValue,
    Space,

    // Derived from the numeric type
    Numeric,

    // Derived from the bidi class
    BidiLeftToRight,
    BidiHebrewRightToLeft,
    BidiArabicRightToLeft,
    BidiEuropeanDigit,
    BidiEurNumSeparator,
    BidiEurNumTerminator,
    BidiArabicDigit,
    BidiCommonSeparator,
    BidiBlockSeparator,
    BidiSegmentSeparator,
    BidiWhitespace,
    BidiNonSpacingMark,
    BidiBoundaryNeutral,
    BidiPdf,
    BidiEmbeddingOrOverride,
    BidiOtherNeutral,
}

enum Source {
    Table(&'static Trie),
    Category(UcGeneralCategory),
    Bidi(&'static [UcBidiClass]),
    NumericType,
}

impl UcProperty {
    fn source(self) -> Source {
        use Source::*;
        use UcProperty as P;
        match self {
            P::WhiteSpace => Table(&PROP_WHITE_SPACE),
            P::Alphabetic => Table(&PROP_ALPHABETIC),
            P::Lowercase => Table(&PROP_LOWERCASE),
            P::Uppercase => Table(&PROP_UPPERCASE),
            P::Cased => Table(&PROP_CASED),
            P::CaseIgnorable => Table(&PROP_CASE_IGNORABLE),
            P::Math => Table(&PROP_MATH),
            P::HexDigit => Table(&PROP_HEX_DIGIT),
            P::AsciiHexDigit => Table(&PROP_ASCII_HEX_DIGIT),
            P::Ideographic => Table(&PROP_IDEOGRAPHIC),
            P::UnifiedIdeograph => Table(&PROP_UNIFIED_IDEOGRAPH),
            P::Radical => Table(&PROP_RADICAL),
            P::IdsBinaryOperator => Table(&PROP_IDS_BINARY_OPERATOR),
            P::IdsTrinaryOperator => Table(&PROP_IDS_TRINARY_OPERATOR),
            P::Dash => Table(&PROP_DASH),
            P::Hyphen => Table(&PROP_HYPHEN),
            P::QuotationMark => Table(&PROP_QUOTATION_MARK),
            P::TerminalPunctuation => Table(&PROP_TERMINAL_PUNCTUATION),
            P::SentenceTerminal => Table(&PROP_SENTENCE_TERMINAL),
            P::Diacritic => Table(&PROP_DIACRITIC),
            P::Extender => Table(&PROP_EXTENDER),
            P::DefaultIgnorableCodePoint => Table(&PROP_DEFAULT_IGNORABLE_CODE_POINT),
            P::BidiControl => Table(&PROP_BIDI_CONTROL),
            P::BidiMirrored => Table(&PROP_BIDI_MIRRORED),
            P::JoinControl => Table(&PROP_JOIN_CONTROL),
            P::SoftDotted => Table(&PROP_SOFT_DOTTED),
            P::VariationSelector => Table(&PROP_VARIATION_SELECTOR),
            P::NoncharacterCodePoint => Table(&PROP_NONCHARACTER_CODE_POINT),
            P::IdStart => Table(&PROP_ID_START),
            P::IdContinue => Table(&PROP_ID_CONTINUE),
            P::XidStart => Table(&PROP_XID_START),
            P::XidContinue => Table(&PROP_XID_CONTINUE),
            P::PatternSyntax => Table(&PROP_PATTERN_SYNTAX),
            P::PatternWhiteSpace => Table(&PROP_PATTERN_WHITE_SPACE),
            P::GraphemeBase => Table(&PROP_GRAPHEME_BASE),
            P::GraphemeExtend => Table(&PROP_GRAPHEME_EXTEND),
            P::LogicalOrderException => Table(&PROP_LOGICAL_ORDER_EXCEPTION),
            P::Deprecated => Table(&PROP_DEPRECATED),
            P::PrependedConcatenationMark => Table(&PROP_PREPENDED_CONCATENATION_MARK),
            P::RegionalIndicator => Table(&PROP_REGIONAL_INDICATOR),
            P::Emoji => Table(&PROP_EMOJI),
            P::EmojiPresentation => Table(&PROP_EMOJI_PRESENTATION),
            P::EmojiModifier => Table(&PROP_EMOJI_MODIFIER),
            P::EmojiModifierBase => Table(&PROP_EMOJI_MODIFIER_BASE),
            P::EmojiComponent => Table(&PROP_EMOJI_COMPONENT),
            P::ExtendedPictographic => Table(&PROP_EXTENDED_PICTOGRAPHIC),
            P::ChangesWhenLowercased => Table(&PROP_CHANGES_WHEN_LOWERCASED),
            P::ChangesWhenUppercased => Table(&PROP_CHANGES_WHEN_UPPERCASED),
            P::ChangesWhenTitlecased => Table(&PROP_CHANGES_WHEN_TITLECASED),
            P::ChangesWhenCasefolded => Table(&PROP_CHANGES_WHEN_CASEFOLDED),
            P::ChangesWhenCasemapped => Table(&PROP_CHANGES_WHEN_CASEMAPPED),

            P::Titlecase => Category(UcGeneralCategory::LT),
            P::Combining => Category(UcGeneralCategory::M),
            P::DecimalDigit => Category(UcGeneralCategory::ND),
            P::Punctuation => Category(UcGeneralCategory::P),
            P::CurrencySymbol => Category(UcGeneralCategory::SC),
            P::MathSymbol => Category(UcGeneralCategory::SM),
            P::IsoControl => Category(UcGeneralCategory::CC),
            P::FormatControl => Category(UcGeneralCategory::CF),
            P::PrivateUse => Category(UcGeneralCategory::CO),
            P::UnassignedCodeValue => Category(UcGeneralCategory::CN),
            P::Space => Category(UcGeneralCategory::Z),

            P::Numeric => NumericType,

            P::BidiLeftToRight => Bidi(&[UcBidiClass::L]),
            P::BidiHebrewRightToLeft => Bidi(&[UcBidiClass::R]),
            P::BidiArabicRightToLeft => Bidi(&[UcBidiClass::Al]),
            P::BidiEuropeanDigit => Bidi(&[UcBidiClass::En]),
            P::BidiEurNumSeparator => Bidi(&[UcBidiClass::Es]),
            P::BidiEurNumTerminator => Bidi(&[UcBidiClass::Et]),
            P::BidiArabicDigit => Bidi(&[UcBidiClass::An]),
            P::BidiCommonSeparator => Bidi(&[UcBidiClass::Cs]),
            P::BidiBlockSeparator => Bidi(&[UcBidiClass::B]),
            P::BidiSegmentSeparator => Bidi(&[UcBidiClass::S]),
            P::BidiWhitespace => Bidi(&[UcBidiClass::Ws]),
            P::BidiNonSpacingMark => Bidi(&[UcBidiClass::Nsm]),
            P::BidiBoundaryNeutral => Bidi(&[UcBidiClass::Bn]),
            P::BidiPdf => Bidi(&[UcBidiClass::Pdf]),
            P::BidiEmbeddingOrOverride => Bidi(&[
                UcBidiClass::Lre,
                UcBidiClass::Rle,
                UcBidiClass::Lro,
                UcBidiClass::Rlo,
            ]),
            P::BidiOtherNeutral => Bidi(&[UcBidiClass::On]),
        }
    }

    /// The canonical name of the property, as accepted by
    /// [`uc_property_byname`].
    pub fn name(self) -> &'static str {
        PROPERTY_NAMES
            .iter()
            .find(|(_, p)| *p == self)
            .map_or("", |(name, _)| name)
    }
}

/// Tests whether `uc` has `property`.
pub fn uc_is_property(uc: Ucs4, property: UcProperty) -> bool {
    match property.source() {
        Source::Table(trie) => trie.contains(uc),
        Source::Category(mask) => uc_is_general_category(uc, mask),
        Source::Bidi(classes) => classes.contains(&uc_bidi_class(uc)),
        Source::NumericType => has_numeric_type(uc),
    }
}

// Canonical name first for every property; aliases follow.
static PROPERTY_NAMES: &[(&str, UcProperty)] = &[
    ("White_Space", UcProperty::WhiteSpace),
    ("Alphabetic", UcProperty::Alphabetic),
    ("Lowercase", UcProperty::Lowercase),
    ("Uppercase", UcProperty::Uppercase),
    ("Cased", UcProperty::Cased),
    ("Case_Ignorable", UcProperty::CaseIgnorable),
    ("Math", UcProperty::Math),
    ("Hex_Digit", UcProperty::HexDigit),
    ("ASCII_Hex_Digit", UcProperty::AsciiHexDigit),
    ("Ideographic", UcProperty::Ideographic),
    ("Unified_Ideograph", UcProperty::UnifiedIdeograph),
    ("Radical", UcProperty::Radical),
    ("IDS_Binary_Operator", UcProperty::IdsBinaryOperator),
    ("IDS_Trinary_Operator", UcProperty::IdsTrinaryOperator),
    ("Dash", UcProperty::Dash),
    ("Hyphen", UcProperty::Hyphen),
    ("Quotation_Mark", UcProperty::QuotationMark),
    ("Terminal_Punctuation", UcProperty::TerminalPunctuation),
    ("Sentence_Terminal", UcProperty::SentenceTerminal),
    ("Diacritic", UcProperty::Diacritic),
    ("Extender", UcProperty::Extender),
    ("Default_Ignorable_Code_Point", UcProperty::DefaultIgnorableCodePoint),
    ("Bidi_Control", UcProperty::BidiControl),
    ("Bidi_Mirrored", UcProperty::BidiMirrored),
    ("Join_Control", UcProperty::JoinControl),
    ("Soft_Dotted", UcProperty::SoftDotted),
    ("Variation_Selector", UcProperty::VariationSelector),
    ("Noncharacter_Code_Point", UcProperty::NoncharacterCodePoint),
    ("ID_Start", UcProperty::IdStart),
    ("ID_Continue", UcProperty::IdContinue),
    ("XID_Start", UcProperty::XidStart),
    ("XID_Continue", UcProperty::XidContinue),
    ("Pattern_Syntax", UcProperty::PatternSyntax),
    ("Pattern_White_Space", UcProperty::PatternWhiteSpace),
    ("Grapheme_Base", UcProperty::GraphemeBase),
    ("Grapheme_Extend", UcProperty::GraphemeExtend),
    ("Logical_Order_Exception", UcProperty::LogicalOrderException),
    ("Deprecated", UcProperty::Deprecated),
    ("Prepended_Concatenation_Mark", UcProperty::PrependedConcatenationMark),
    ("Regional_Indicator", UcProperty::RegionalIndicator),
    ("Emoji", UcProperty::Emoji),
    ("Emoji_Presentation", UcProperty::EmojiPresentation),
    ("Emoji_Modifier", UcProperty::EmojiModifier),
    ("Emoji_Modifier_Base", UcProperty::EmojiModifierBase),
    ("Emoji_Component", UcProperty::EmojiComponent),
    ("Extended_Pictographic", UcProperty::ExtendedPictographic),
    ("Changes_When_Lowercased", UcProperty::ChangesWhenLowercased),
    ("Changes_When_Uppercased", UcProperty::ChangesWhenUppercased),
    ("Changes_When_Titlecased", UcProperty::ChangesWhenTitlecased),
    ("Changes_When_Casefolded", UcProperty::ChangesWhenCasefolded),
    ("Changes_When_Casemapped", UcProperty::ChangesWhenCasemapped),
    ("Titlecase", UcProperty::Titlecase),
    ("Combining", UcProperty::Combining),
    ("Decimal_Digit", UcProperty::DecimalDigit),
    ("Punctuation", UcProperty::Punctuation),
    ("Currency_Symbol", UcProperty::CurrencySymbol),
    ("Math_Symbol", UcProperty::MathSymbol),
    ("ISO_Control", UcProperty::IsoControl),
    ("Format_Control", UcProperty::FormatControl),
    ("Private_Use", UcProperty::PrivateUse),
    ("Unassigned_Code_Value", UcProperty::UnassignedCodeValue),
    ("Space", UcProperty::Space),
    ("Numeric", UcProperty::Numeric),
    ("Bidi_Left_To_Right", UcProperty::BidiLeftToRight),
    ("Bidi_Hebrew_Right_To_Left", UcProperty::BidiHebrewRightToLeft),
    ("Bidi_Arabic_Right_To_Left", UcProperty::BidiArabicRightToLeft),
    ("Bidi_European_Digit", UcProperty::BidiEuropeanDigit),
    ("Bidi_Eur_Num_Separator", UcProperty::BidiEurNumSeparator),
    ("Bidi_Eur_Num_Terminator", UcProperty::BidiEurNumTerminator),
    ("Bidi_Arabic_Digit", UcProperty::BidiArabicDigit),
    ("Bidi_Common_Separator", UcProperty::BidiCommonSeparator),
    ("Bidi_Block_Separator", UcProperty::BidiBlockSeparator),
    ("Bidi_Segment_Separator", UcProperty::BidiSegmentSeparator),
    ("Bidi_Whitespace", UcProperty::BidiWhitespace),
    ("Bidi_Non_Spacing_Mark", UcProperty::BidiNonSpacingMark),
    ("Bidi_Boundary_Neutral", UcProperty::BidiBoundaryNeutral),
    ("Bidi_PDF", UcProperty::BidiPdf),
    ("Bidi_Embedding_Or_Override", UcProperty::BidiEmbeddingOrOverride),
    ("Bidi_Other_Neutral", UcProperty::BidiOtherNeutral),
    // aliases
    ("WSpace", UcProperty::WhiteSpace),
    ("Alpha", UcProperty::Alphabetic),
    ("Lower", UcProperty::Lowercase),
    ("Upper", UcProperty::Uppercase),
    ("CI", UcProperty::CaseIgnorable),
    ("Hex", UcProperty::HexDigit),
    ("AHex", UcProperty::AsciiHexDigit),
    ("Ideo", UcProperty::Ideographic),
    ("QMark", UcProperty::QuotationMark),
    ("Term", UcProperty::TerminalPunctuation),
    ("STerm", UcProperty::SentenceTerminal),
    ("Dia", UcProperty::Diacritic),
    ("Ext", UcProperty::Extender),
    ("DI", UcProperty::DefaultIgnorableCodePoint),
    ("Join_C", UcProperty::JoinControl),
    ("NChar", UcProperty::NoncharacterCodePoint),
    ("IDS", UcProperty::IdStart),
    ("IDC", UcProperty::IdContinue),
    ("XIDS", UcProperty::XidStart),
    ("XIDC", UcProperty::XidContinue),
    ("Gr_Base", UcProperty::GraphemeBase),
    ("Gr_Ext", UcProperty::GraphemeExtend),
    ("RI", UcProperty::RegionalIndicator),
    ("ExtPict", UcProperty::ExtendedPictographic),
];

/// Looks a property up by name or alias, e.g. "White_Space" or "wspace".
pub fn uc_property_byname(name: &str) -> Option<UcProperty> {
    names::lookup(name, PROPERTY_NAMES)
}

macro_rules! property_predicates {
    ($($func:ident => $prop:ident,)*) => {
        $(
            #[inline]
            pub fn $func(uc: Ucs4) -> bool {
                uc_is_property(uc, UcProperty::$prop)
            }
        )*
    };
}

property_predicates! {
    uc_is_property_white_space => WhiteSpace,
    uc_is_property_alphabetic => Alphabetic,
    uc_is_property_lowercase => Lowercase,
    uc_is_property_uppercase => Uppercase,
    uc_is_property_titlecase => Titlecase,
    uc_is_property_cased => Cased,
    uc_is_property_case_ignorable => CaseIgnorable,
    uc_is_property_math => Math,
    uc_is_property_hex_digit => HexDigit,
    uc_is_property_ascii_hex_digit => AsciiHexDigit,
    uc_is_property_ideographic => Ideographic,
    uc_is_property_dash => Dash,
    uc_is_property_hyphen => Hyphen,
    uc_is_property_quotation_mark => QuotationMark,
    uc_is_property_terminal_punctuation => TerminalPunctuation,
    uc_is_property_sentence_terminal => SentenceTerminal,
    uc_is_property_diacritic => Diacritic,
    uc_is_property_default_ignorable_code_point => DefaultIgnorableCodePoint,
    uc_is_property_bidi_control => BidiControl,
    uc_is_property_join_control => JoinControl,
    uc_is_property_soft_dotted => SoftDotted,
    uc_is_property_variation_selector => VariationSelector,
    uc_is_property_not_a_character => NoncharacterCodePoint,
    uc_is_property_id_start => IdStart,
    uc_is_property_id_continue => IdContinue,
    uc_is_property_xid_start => XidStart,
    uc_is_property_xid_continue => XidContinue,
    uc_is_property_pattern_syntax => PatternSyntax,
    uc_is_property_pattern_white_space => PatternWhiteSpace,
    uc_is_property_grapheme_base => GraphemeBase,
    uc_is_property_grapheme_extend => GraphemeExtend,
    uc_is_property_emoji => Emoji,
    uc_is_property_emoji_presentation => EmojiPresentation,
    uc_is_property_regional_indicator => RegionalIndicator,
    uc_is_property_prepended_concatenation_mark => PrependedConcatenationMark,
    uc_is_property_combining => Combining,
    uc_is_property_decimal_digit => DecimalDigit,
    uc_is_property_numeric => Numeric,
    uc_is_property_punctuation => Punctuation,
    uc_is_property_currency_symbol => CurrencySymbol,
    uc_is_property_iso_control => IsoControl,
    uc_is_property_format_control => FormatControl,
    uc_is_property_private_use => PrivateUse,
    uc_is_property_unassigned_code_value => UnassignedCodeValue,
    uc_is_property_bidi_arabic_digit => BidiArabicDigit,
    uc_is_property_bidi_european_digit => BidiEuropeanDigit,
    uc_is_property_bidi_embedding_or_override => BidiEmbeddingOrOverride,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_properties() {
        assert!(uc_is_property(' ' as u32, UcProperty::WhiteSpace));
        assert!(uc_is_property(0x3000, UcProperty::WhiteSpace));
        assert!(!uc_is_property('a' as u32, UcProperty::WhiteSpace));
        assert!(uc_is_property_alphabetic(0x0416));
        assert!(uc_is_property_hex_digit('F' as u32));
        assert!(uc_is_property_hex_digit(0xFF21));
        assert!(!uc_is_property_ascii_hex_digit(0xFF21));
        assert!(uc_is_property_soft_dotted('i' as u32));
        assert!(uc_is_property_not_a_character(0xFFFE));
        assert!(uc_is_property_not_a_character(0x10FFFF));
        assert!(uc_is_property(0x1F600, UcProperty::Emoji));
    }

    #[test]
    fn derived_properties() {
        assert!(uc_is_property_titlecase(0x01C5));
        assert!(uc_is_property_combining(0x0301));
        assert!(uc_is_property_decimal_digit(0x0663));
        assert!(uc_is_property_numeric(0x00BD));
        assert!(!uc_is_property_numeric('x' as u32));
        assert!(uc_is_property_currency_symbol(0x20AC));
        assert!(uc_is_property_iso_control(0x7F));
        assert!(uc_is_property_unassigned_code_value(0x0378));
        assert!(uc_is_property_bidi_arabic_digit(0x0661));
        assert!(uc_is_property_bidi_european_digit('4' as u32));
        assert!(uc_is_property_bidi_embedding_or_override(0x202B));
        assert!(!uc_is_property_bidi_embedding_or_override(0x2067));
    }

    #[test]
    fn out_of_range_has_no_property() {
        assert!(!uc_is_property(0x110000, UcProperty::Alphabetic));
        assert!(!uc_is_property(0x110000, UcProperty::Numeric));
        assert!(uc_is_property(0x110000, UcProperty::UnassignedCodeValue));
    }

    #[test]
    fn byname() {
        assert_eq!(uc_property_byname("White_Space"), Some(UcProperty::WhiteSpace));
        assert_eq!(uc_property_byname("white space"), Some(UcProperty::WhiteSpace));
        assert_eq!(uc_property_byname("WSpace"), Some(UcProperty::WhiteSpace));
        assert_eq!(uc_property_byname("ExtPict"), Some(UcProperty::ExtendedPictographic));
        assert_eq!(uc_property_byname("not-a-property"), None);
    }

    #[test]
    fn names_roundtrip() {
        for &(name, prop) in PROPERTY_NAMES {
            assert_eq!(uc_property_byname(prop.name()), Some(prop), "{}", name);
        }
        assert_eq!(UcProperty::BidiPdf.name(), "Bidi_PDF");
    }
}
