/// Syntactic context.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Context {
    /// If true, await expression is parsed, and "await" is treated as a
    /// keyword.
    pub in_async: bool,
    /// If true, yield expression is parsed, and "yield" is treated as a
    /// keyword.
    pub in_generator: bool,

    pub in_function: bool,

    /// `in` is not a binary operator; set in the head of a `for` statement.
    pub no_in: bool,

    /// Parsing the consequent of a conditional, where `:` may end the
    /// expression instead of starting an arrow return type.
    pub in_cond_expr: bool,

    /// Flow: `T => U` is not a function type here, because `=>` belongs to
    /// the enclosing arrow function.
    pub no_anon_function_type: bool,

    /// Inside the body of `declare module`.
    pub in_declare_module: bool,
}
