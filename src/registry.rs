//! Keyword registry - the mutable namespace of the calculator
//!
//! Maps a symbol name to what it means: a builtin operation, a user macro,
//! or the assignment marker. The registry starts from the builtin table and
//! grows as macros are defined; defining a macro under a builtin's name
//! shadows that builtin for every subsequent line.
//!
//! A lookup yields a tagged [`Kind`] rather than a bare string, so the
//! evaluator dispatches with an exhaustive match instead of falling through
//! on unknown strings.

use std::collections::HashMap;

/// Identifier for one builtin operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Not,
    Incr,
    Decr,
    // Bitwise
    BitAnd,
    BitOr,
    BitXor,
    BitNot,
    Shl,
    Shr,
    // Boolean
    BoolAnd,
    BoolOr,
    BoolXor,
    // Comparison
    Ne,
    Eq,
    Lt,
    Le,
    Gt,
    Ge,
    // Trigonometric
    Acos,
    Asin,
    Atan,
    Cos,
    Cosh,
    Sin,
    Sinh,
    Tanh,
    // Numeric utilities
    Ceil,
    Floor,
    Round,
    Ip,
    Fp,
    Sign,
    Abs,
    Max,
    Min,
    // Display modes
    Hex,
    Dec,
    Bin,
    Oct,
    // Constants
    E,
    Pi,
    Rand,
    // Mathematic functions
    Pow,
    Fact,
    Sqrt,
    Ln,
    Log,
    // Byte order
    Hnl,
    Hns,
    Nhl,
    Nhs,
    // Stack manipulation
    Pick,
    Repeat,
    Depth,
    Drop,
    DropN,
    Dup,
    DupN,
    Roll,
    RollD,
    StackToggle,
    Swap,
    // Clears
    Cla,
    Clr,
    Clv,
    // Other
    Macro,
    Help,
    Exit,
    Debug,
}

/// What a registered name resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// A builtin operation
    Builtin(Op),
    /// A user-defined macro; its captured body lives in the variable table
    Macro,
    /// The assignment marker
    Assign,
}

/// The builtin table: name, operation, one-line description.
///
/// Order here is the order `help` prints.
const BUILTINS: &[(&str, Op, &str)] = &[
    // Arithmetic operators
    ("+", Op::Add, "Add"),
    ("-", Op::Sub, "Subtract"),
    ("*", Op::Mul, "Multiply"),
    ("/", Op::Div, "Divide"),
    ("cla", Op::Cla, "Clear the stack and variables"),
    ("clr", Op::Clr, "Clear the stack"),
    ("clv", Op::Clv, "Clear the variables"),
    ("!", Op::Not, "Boolean NOT"),
    ("%", Op::Mod, "Modulus"),
    ("++", Op::Incr, "Increment"),
    ("--", Op::Decr, "Decrement"),
    // Bitwise operators
    ("&", Op::BitAnd, "Bitwise AND"),
    ("|", Op::BitOr, "Bitwise OR"),
    ("^", Op::BitXor, "Bitwise XOR"),
    ("~", Op::BitNot, "Bitwise NOT"),
    ("<<", Op::Shl, "Bitwise shift left"),
    (">>", Op::Shr, "Bitwise shift right"),
    // Boolean operators
    ("&&", Op::BoolAnd, "Boolean AND"),
    ("||", Op::BoolOr, "Boolean OR"),
    ("^^", Op::BoolXor, "Boolean XOR"),
    // Comparison operators
    ("!=", Op::Ne, "Not equal to"),
    ("<", Op::Lt, "Less than"),
    ("<=", Op::Le, "Less than or equal to"),
    ("==", Op::Eq, "Equal to"),
    (">", Op::Gt, "Greater than"),
    (">=", Op::Ge, "Greater than or equal to"),
    // Trigonometric functions
    ("acos", Op::Acos, "Arc cosine"),
    ("asin", Op::Asin, "Arc sine"),
    ("atan", Op::Atan, "Arc tangent"),
    ("cos", Op::Cos, "Cosine"),
    ("cosh", Op::Cosh, "Hyperbolic cosine"),
    ("sin", Op::Sin, "Sine"),
    ("sinh", Op::Sinh, "Hyperbolic sine"),
    ("tanh", Op::Tanh, "Hyperbolic tangent"),
    // Numeric utilities
    ("ceil", Op::Ceil, "Ceiling"),
    ("floor", Op::Floor, "Floor"),
    ("round", Op::Round, "Round to the nearest integer"),
    ("ip", Op::Ip, "Integer part"),
    ("fp", Op::Fp, "Fractional part"),
    ("sign", Op::Sign, "Push -1, 0, or 1 depending on the sign"),
    ("abs", Op::Abs, "Absolute value"),
    ("max", Op::Max, "Max"),
    ("min", Op::Min, "Min"),
    // Display modes
    ("hex", Op::Hex, "Switch display mode to hexadecimal"),
    ("dec", Op::Dec, "Switch display mode to decimal (default)"),
    ("bin", Op::Bin, "Switch display mode to binary"),
    ("oct", Op::Oct, "Switch display mode to octal"),
    // Constants
    ("e", Op::E, "Push e"),
    ("pi", Op::Pi, "Push pi"),
    ("rand", Op::Rand, "Push a random number in [0,1)"),
    // Mathematic functions
    ("exp", Op::Pow, "Exponentiation"),
    ("fact", Op::Fact, "Factorial"),
    ("sqrt", Op::Sqrt, "Square root"),
    ("ln", Op::Ln, "Natural logarithm"),
    ("log", Op::Log, "Base-10 logarithm"),
    ("pow", Op::Pow, "Raise a number to a power"),
    ("**", Op::Pow, "Raise a number to a power"),
    // Byte order
    ("hnl", Op::Hnl, "Host to network long"),
    ("hns", Op::Hns, "Host to network short"),
    ("nhl", Op::Nhl, "Network to host long"),
    ("nhs", Op::Nhs, "Network to host short"),
    // Stack manipulation
    ("pick", Op::Pick, "Pick the value at stack index n"),
    ("repeat", Op::Repeat, "Repeat the following value n times, e.g. '3 repeat +'"),
    ("depth", Op::Depth, "Push the current stack depth"),
    ("drop", Op::Drop, "Drop the top stack value"),
    ("dropn", Op::DropN, "Drop the top n stack values"),
    ("dup", Op::Dup, "Duplicate the top stack value"),
    ("dupn", Op::DupN, "Duplicate the top n stack values in order"),
    ("roll", Op::Roll, "Roll the stack upwards by n"),
    ("rolld", Op::RollD, "Roll the stack downwards by n"),
    ("stack", Op::StackToggle, "Toggle stack display between horizontal and vertical"),
    ("swap", Op::Swap, "Swap the top two stack values"),
    // Macros and variables
    ("macro", Op::Macro, "Define a macro, e.g. 'macro kib 1024 *'"),
    // Other
    ("help", Op::Help, "Print this help message"),
    ("exit", Op::Exit, "Exit the calculator"),
    ("debug", Op::Debug, "Toggle debug tracing"),
];

/// Mutable mapping from symbol name to its [`Kind`]
#[derive(Debug, Clone)]
pub struct Registry {
    words: HashMap<String, Kind>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// Build a registry holding every builtin plus the assignment marker
    pub fn new() -> Self {
        let mut words = HashMap::with_capacity(BUILTINS.len() + 1);
        for (name, op, _) in BUILTINS {
            words.insert((*name).to_string(), Kind::Builtin(*op));
        }
        words.insert("=".to_string(), Kind::Assign);
        Registry { words }
    }

    pub fn is_keyword(&self, name: &str) -> bool {
        self.words.contains_key(name)
    }

    pub fn kind(&self, name: &str) -> Option<Kind> {
        self.words.get(name).copied()
    }

    /// Register a macro name, shadowing any builtin of the same name
    pub fn define_macro(&mut self, name: &str) {
        self.words.insert(name.to_string(), Kind::Macro);
    }

    /// Render the operator table, one line per word
    pub fn usage(&self) -> String {
        let mut out = String::from("OPERATORS:\n");
        for (name, _, desc) in BUILTINS {
            out.push_str(&format!("    {:<8}{}\n", name, desc));
        }
        out.push_str("    name=   Assign a variable, e.g. '1024 x='\n");
        let mut macros: Vec<&str> = self
            .words
            .iter()
            .filter(|(_, kind)| **kind == Kind::Macro)
            .map(|(name, _)| name.as_str())
            .collect();
        if !macros.is_empty() {
            macros.sort_unstable();
            out.push_str("\nMACROS:\n");
            for name in macros {
                out.push_str(&format!("    {}\n", name));
            }
        }
        out
    }
}
