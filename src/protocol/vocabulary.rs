//! Closed option sets accepted by Agda's interactive commands.
//!
//! Each set is a typed enum whose variants render to the exact token the
//! external tool expects. Parsing a string outside the set fails with
//! [`CommandError::InvalidArgument`], carrying the offending value and the
//! full list of legal tokens.

use crate::error::CommandError;
use std::fmt;
use std::str::FromStr;

macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($variant:ident => $token:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant,)+
        }

        impl $name {
            /// Every legal value, in protocol order
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];

            /// Every legal token, in protocol order
            pub const TOKENS: &'static [&'static str] = &[$($token,)+];

            /// Protocol token for this value
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $token,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = CommandError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($token => Ok($name::$variant),)+
                    _ => Err(CommandError::invalid_argument(s, Self::TOKENS)),
                }
            }
        }
    };
}

vocabulary! {
    /// Compiler backend for `Cmd_compile`
    pub enum Backend {
        Ghc => "GHC",
        GhcNoMain => "GHCNoMain",
        Latex => "LaTeX",
        QuickLatex => "QuickLaTeX",
    }
}

vocabulary! {
    /// How much normalisation to apply before displaying a term
    pub enum Rewrite {
        AsIs => "AsIs",
        Instantiated => "Instantiated",
        HeadNormal => "HeadNormal",
        Simplified => "Simplified",
        Normalised => "Normalised",
    }
}

vocabulary! {
    /// Evaluation strategy for `Cmd_compute` and `Cmd_compute_toplevel`
    pub enum ComputeMode {
        DefaultCompute => "DefaultCompute",
        IgnoreAbstract => "IgnoreAbstract",
        UseShowInstance => "UseShowInstance",
    }
}

vocabulary! {
    /// Whether `Cmd_tokenHighlighting` drops the highlighting file afterwards
    pub enum RemoveOrKeep {
        Remove => "Remove",
        Keep => "Keep",
    }
}

vocabulary! {
    /// Whether `Cmd_give` bypasses the type checker's safety checks
    pub enum UseForce {
        WithForce => "WithForce",
        WithoutForce => "WithoutForce",
    }
}

/// Every vocabulary token, used for completion in the REPL
pub fn all_tokens() -> impl Iterator<Item = &'static str> {
    Backend::TOKENS
        .iter()
        .chain(Rewrite::TOKENS)
        .chain(ComputeMode::TOKENS)
        .chain(RemoveOrKeep::TOKENS)
        .chain(UseForce::TOKENS)
        .copied()
}
