/// The engine core.
///
/// Contains the token cursor and the precedence-climbing loop that drives all
/// parsing.
pub mod core;

/// Parsing rules.
///
/// Defines the token-type-indexed rule table and all prefix ("nud") and infix
/// ("led") handlers the engine dispatches to.
pub mod rules;
