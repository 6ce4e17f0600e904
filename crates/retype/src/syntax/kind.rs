use logos::Logos;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum SyntaxKind {
    // Tokens
    Error = 0,
    Whitespace,
    Comment,

    // Identifiers & Literals
    Ident,
    Integer,
    Float,
    Imaginary,
    Rune,
    String,
    RawString,

    // Punctuation
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Semicolon,
    Colon,
    Comma,
    Dot,
    Ellipsis,

    // Operators
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Caret,
    Amp,
    Pipe,
    Tilde,
    Exclaim,
    Equal,
    Less,
    Greater,
    Arrow,
    Define,
    PlusPlus,
    MinusMinus,
    PlusEqual,
    MinusEqual,
    StarEqual,
    SlashEqual,
    PercentEqual,
    CaretEqual,
    AmpEqual,
    PipeEqual,
    AmpCaret,
    AmpCaretEqual,
    EqualEqual,
    NotEqual,
    LessEqual,
    GreaterEqual,
    AndAnd,
    OrOr,
    LeftShift,
    RightShift,
    LeftShiftEqual,
    RightShiftEqual,

    // Go keywords
    KwBreak,
    KwCase,
    KwChan,
    KwConst,
    KwContinue,
    KwDefault,
    KwDefer,
    KwElse,
    KwFallthrough,
    KwFor,
    KwFunc,
    KwGo,
    KwGoto,
    KwIf,
    KwImport,
    KwInterface,
    KwMap,
    KwPackage,
    KwRange,
    KwReturn,
    KwSelect,
    KwStruct,
    KwSwitch,
    KwType,
    KwVar,

    // Composite Nodes (Parser output)
    SourceFile,
    PackageClause,
    ImportDecl,
    TypeDecl,
    TypeSpec,
    TypeParamList,
    VarDecl,
    ConstDecl,
    ValueSpec,
    ExprList,
    FuncDecl,
    Receiver,
    ParamList,
    Results,
    Field,
    Tag,
    Block,
    Stmt,
    Expr,
    CompositeLit,
    LiteralValue,
    FuncLit,
    TypeName,
    TypeArgList,
    PointerType,
    ArrayType,
    ArrayLen,
    MapType,
    ChanType,
    FuncType,
    InterfaceType,
    MethodElem,
    TypeElem,
    StructType,
    ParenType,
    VariadicType,
}

impl SyntaxKind {
    pub fn is_trivia(self) -> bool {
        matches!(self, SyntaxKind::Whitespace | SyntaxKind::Comment)
    }

    /// Tokens after which a newline terminates the statement.
    pub fn ends_statement_at_newline(self) -> bool {
        matches!(
            self,
            SyntaxKind::Ident
                | SyntaxKind::Integer
                | SyntaxKind::Float
                | SyntaxKind::Imaginary
                | SyntaxKind::Rune
                | SyntaxKind::String
                | SyntaxKind::RawString
                | SyntaxKind::KwBreak
                | SyntaxKind::KwContinue
                | SyntaxKind::KwFallthrough
                | SyntaxKind::KwReturn
                | SyntaxKind::PlusPlus
                | SyntaxKind::MinusMinus
                | SyntaxKind::RParen
                | SyntaxKind::RBracket
                | SyntaxKind::RBrace
        )
    }

    /// Tokens that can open a type expression.
    pub fn starts_type(self) -> bool {
        matches!(
            self,
            SyntaxKind::Ident
                | SyntaxKind::Star
                | SyntaxKind::LBracket
                | SyntaxKind::LParen
                | SyntaxKind::Arrow
                | SyntaxKind::KwStruct
                | SyntaxKind::KwMap
                | SyntaxKind::KwChan
                | SyntaxKind::KwFunc
                | SyntaxKind::KwInterface
        )
    }

    pub fn is_binary_operator(self) -> bool {
        matches!(
            self,
            SyntaxKind::Plus
                | SyntaxKind::Minus
                | SyntaxKind::Star
                | SyntaxKind::Slash
                | SyntaxKind::Percent
                | SyntaxKind::Caret
                | SyntaxKind::Amp
                | SyntaxKind::Pipe
                | SyntaxKind::AmpCaret
                | SyntaxKind::EqualEqual
                | SyntaxKind::NotEqual
                | SyntaxKind::Less
                | SyntaxKind::Greater
                | SyntaxKind::LessEqual
                | SyntaxKind::GreaterEqual
                | SyntaxKind::AndAnd
                | SyntaxKind::OrOr
                | SyntaxKind::LeftShift
                | SyntaxKind::RightShift
        )
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    fn from(kind: SyntaxKind) -> Self {
        rowan::SyntaxKind(kind as u16)
    }
}

#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(error = ())] // Use unit type for error
pub enum TokenKind {
    #[regex(r"[ \t\r\n\f]+")]
    Whitespace,

    #[regex(r"//.*", allow_greedy = true)]
    #[regex(r"/\*([^*]|\*+[^*/])*\*+/")]
    Comment,

    // Punctuation
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(";")]
    Semicolon,
    #[token(":")]
    Colon,
    #[token(",")]
    Comma,
    #[token("...")]
    Ellipsis,
    #[token(".")]
    Dot,

    // Operators (multi-char first)
    #[token(">>=")]
    RightShiftEqual,
    #[token("<<=")]
    LeftShiftEqual,
    #[token("&^=")]
    AmpCaretEqual,
    #[token("&^")]
    AmpCaret,
    #[token(":=")]
    Define,
    #[token("<-")]
    Arrow,
    #[token("++")]
    PlusPlus,
    #[token("--")]
    MinusMinus,
    #[token("+=")]
    PlusEqual,
    #[token("-=")]
    MinusEqual,
    #[token("*=")]
    StarEqual,
    #[token("/=")]
    SlashEqual,
    #[token("%=")]
    PercentEqual,
    #[token("&=")]
    AmpEqual,
    #[token("|=")]
    PipeEqual,
    #[token("^=")]
    CaretEqual,
    #[token("==")]
    EqualEqual,
    #[token("!=")]
    NotEqual,
    #[token("<=")]
    LessEqual,
    #[token(">=")]
    GreaterEqual,
    #[token("&&")]
    AndAnd,
    #[token("||")]
    OrOr,
    #[token("<<")]
    LeftShift,
    #[token(">>")]
    RightShift,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("^")]
    Caret,
    #[token("&")]
    Amp,
    #[token("|")]
    Pipe,
    #[token("~")]
    Tilde,
    #[token("!")]
    Exclaim,
    #[token("=")]
    Equal,
    #[token("<")]
    Less,
    #[token(">")]
    Greater,

    // Keywords
    #[token("break")]
    KwBreak,
    #[token("case")]
    KwCase,
    #[token("chan")]
    KwChan,
    #[token("const")]
    KwConst,
    #[token("continue")]
    KwContinue,
    #[token("default")]
    KwDefault,
    #[token("defer")]
    KwDefer,
    #[token("else")]
    KwElse,
    #[token("fallthrough")]
    KwFallthrough,
    #[token("for")]
    KwFor,
    #[token("func")]
    KwFunc,
    #[token("go")]
    KwGo,
    #[token("goto")]
    KwGoto,
    #[token("if")]
    KwIf,
    #[token("import")]
    KwImport,
    #[token("interface")]
    KwInterface,
    #[token("map")]
    KwMap,
    #[token("package")]
    KwPackage,
    #[token("range")]
    KwRange,
    #[token("return")]
    KwReturn,
    #[token("select")]
    KwSelect,
    #[token("struct")]
    KwStruct,
    #[token("switch")]
    KwSwitch,
    #[token("type")]
    KwType,
    #[token("var")]
    KwVar,

    // Literals
    #[regex(r"[\p{L}_][\p{L}\p{Nd}_]*")]
    Ident,
    #[regex(r"'([^'\\\n]|\\[^\n])+'")]
    Rune,
    #[regex(r#""([^"\\\n]|\\[^\n])*""#)]
    String,
    #[regex(r"`[^`]*`")]
    RawString,
    #[regex(r"0[xX]_?[0-9A-Fa-f](_?[0-9A-Fa-f])*")]
    #[regex(r"0[bB]_?[01](_?[01])*")]
    #[regex(r"0[oO]_?[0-7](_?[0-7])*")]
    #[regex(r"[0-9](_?[0-9])*")]
    Integer,
    #[regex(r"[0-9](_?[0-9])*\.([0-9](_?[0-9])*)?([eE][+-]?[0-9](_?[0-9])*)?")]
    #[regex(r"\.[0-9](_?[0-9])*([eE][+-]?[0-9](_?[0-9])*)?")]
    #[regex(r"[0-9](_?[0-9])*[eE][+-]?[0-9](_?[0-9])*")]
    Float,
    #[regex(r"[0-9](_?[0-9])*(\.([0-9](_?[0-9])*)?)?([eE][+-]?[0-9](_?[0-9])*)?i")]
    Imaginary,
}

impl From<TokenKind> for SyntaxKind {
    fn from(token: TokenKind) -> Self {
        match token {
            TokenKind::Whitespace => SyntaxKind::Whitespace,
            TokenKind::Comment => SyntaxKind::Comment,
            TokenKind::LParen => SyntaxKind::LParen,
            TokenKind::RParen => SyntaxKind::RParen,
            TokenKind::LBrace => SyntaxKind::LBrace,
            TokenKind::RBrace => SyntaxKind::RBrace,
            TokenKind::LBracket => SyntaxKind::LBracket,
            TokenKind::RBracket => SyntaxKind::RBracket,
            TokenKind::Semicolon => SyntaxKind::Semicolon,
            TokenKind::Colon => SyntaxKind::Colon,
            TokenKind::Comma => SyntaxKind::Comma,
            TokenKind::Ellipsis => SyntaxKind::Ellipsis,
            TokenKind::Dot => SyntaxKind::Dot,
            TokenKind::RightShiftEqual => SyntaxKind::RightShiftEqual,
            TokenKind::LeftShiftEqual => SyntaxKind::LeftShiftEqual,
            TokenKind::AmpCaretEqual => SyntaxKind::AmpCaretEqual,
            TokenKind::AmpCaret => SyntaxKind::AmpCaret,
            TokenKind::Define => SyntaxKind::Define,
            TokenKind::Arrow => SyntaxKind::Arrow,
            TokenKind::PlusPlus => SyntaxKind::PlusPlus,
            TokenKind::MinusMinus => SyntaxKind::MinusMinus,
            TokenKind::PlusEqual => SyntaxKind::PlusEqual,
            TokenKind::MinusEqual => SyntaxKind::MinusEqual,
            TokenKind::StarEqual => SyntaxKind::StarEqual,
            TokenKind::SlashEqual => SyntaxKind::SlashEqual,
            TokenKind::PercentEqual => SyntaxKind::PercentEqual,
            TokenKind::AmpEqual => SyntaxKind::AmpEqual,
            TokenKind::PipeEqual => SyntaxKind::PipeEqual,
            TokenKind::CaretEqual => SyntaxKind::CaretEqual,
            TokenKind::EqualEqual => SyntaxKind::EqualEqual,
            TokenKind::NotEqual => SyntaxKind::NotEqual,
            TokenKind::LessEqual => SyntaxKind::LessEqual,
            TokenKind::GreaterEqual => SyntaxKind::GreaterEqual,
            TokenKind::AndAnd => SyntaxKind::AndAnd,
            TokenKind::OrOr => SyntaxKind::OrOr,
            TokenKind::LeftShift => SyntaxKind::LeftShift,
            TokenKind::RightShift => SyntaxKind::RightShift,
            TokenKind::Plus => SyntaxKind::Plus,
            TokenKind::Minus => SyntaxKind::Minus,
            TokenKind::Star => SyntaxKind::Star,
            TokenKind::Slash => SyntaxKind::Slash,
            TokenKind::Percent => SyntaxKind::Percent,
            TokenKind::Caret => SyntaxKind::Caret,
            TokenKind::Amp => SyntaxKind::Amp,
            TokenKind::Pipe => SyntaxKind::Pipe,
            TokenKind::Tilde => SyntaxKind::Tilde,
            TokenKind::Exclaim => SyntaxKind::Exclaim,
            TokenKind::Equal => SyntaxKind::Equal,
            TokenKind::Less => SyntaxKind::Less,
            TokenKind::Greater => SyntaxKind::Greater,
            TokenKind::KwBreak => SyntaxKind::KwBreak,
            TokenKind::KwCase => SyntaxKind::KwCase,
            TokenKind::KwChan => SyntaxKind::KwChan,
            TokenKind::KwConst => SyntaxKind::KwConst,
            TokenKind::KwContinue => SyntaxKind::KwContinue,
            TokenKind::KwDefault => SyntaxKind::KwDefault,
            TokenKind::KwDefer => SyntaxKind::KwDefer,
            TokenKind::KwElse => SyntaxKind::KwElse,
            TokenKind::KwFallthrough => SyntaxKind::KwFallthrough,
            TokenKind::KwFor => SyntaxKind::KwFor,
            TokenKind::KwFunc => SyntaxKind::KwFunc,
            TokenKind::KwGo => SyntaxKind::KwGo,
            TokenKind::KwGoto => SyntaxKind::KwGoto,
            TokenKind::KwIf => SyntaxKind::KwIf,
            TokenKind::KwImport => SyntaxKind::KwImport,
            TokenKind::KwInterface => SyntaxKind::KwInterface,
            TokenKind::KwMap => SyntaxKind::KwMap,
            TokenKind::KwPackage => SyntaxKind::KwPackage,
            TokenKind::KwRange => SyntaxKind::KwRange,
            TokenKind::KwReturn => SyntaxKind::KwReturn,
            TokenKind::KwSelect => SyntaxKind::KwSelect,
            TokenKind::KwStruct => SyntaxKind::KwStruct,
            TokenKind::KwSwitch => SyntaxKind::KwSwitch,
            TokenKind::KwType => SyntaxKind::KwType,
            TokenKind::KwVar => SyntaxKind::KwVar,
            TokenKind::Ident => SyntaxKind::Ident,
            TokenKind::Rune => SyntaxKind::Rune,
            TokenKind::String => SyntaxKind::String,
            TokenKind::RawString => SyntaxKind::RawString,
            TokenKind::Integer => SyntaxKind::Integer,
            TokenKind::Float => SyntaxKind::Float,
            TokenKind::Imaginary => SyntaxKind::Imaginary,
        }
    }
}
