//! Operation families and their closed sets of operation names

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

/// The five top-level capabilities exposed by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationFamily {
    Case,
    Clean,
    Analyze,
    Encode,
    Generate,
}

impl OperationFamily {
    /// Get all families in catalog order
    pub fn all() -> Vec<OperationFamily> {
        vec![
            OperationFamily::Case,
            OperationFamily::Clean,
            OperationFamily::Analyze,
            OperationFamily::Encode,
            OperationFamily::Generate,
        ]
    }

    /// Get the MCP tool name serving this family
    pub fn tool_name(&self) -> &'static str {
        match self {
            OperationFamily::Case => "convert_case",
            OperationFamily::Clean => "clean_text",
            OperationFamily::Analyze => "analyze_text",
            OperationFamily::Encode => "convert_encoding",
            OperationFamily::Generate => "generate_text",
        }
    }

    /// Get the argument key that carries the operation name
    pub fn operation_key(&self) -> &'static str {
        match self {
            OperationFamily::Case => "target_case",
            OperationFamily::Clean => "operation",
            OperationFamily::Analyze => "analysis_type",
            OperationFamily::Encode => "conversion_type",
            OperationFamily::Generate => "generation_type",
        }
    }

    /// Noun used in "Unknown ..." error messages
    pub fn noun(&self) -> &'static str {
        match self {
            OperationFamily::Case => "case type",
            OperationFamily::Clean => "cleaning operation",
            OperationFamily::Analyze => "analysis type",
            OperationFamily::Encode => "encoding conversion",
            OperationFamily::Generate => "generation type",
        }
    }

    /// Whether operations of this family need a text payload
    pub fn requires_text(&self) -> bool {
        !matches!(self, OperationFamily::Generate)
    }

    /// Operation names accepted by this family
    pub fn operation_names(&self) -> Vec<&'static str> {
        match self {
            OperationFamily::Case => CaseType::ALL.iter().map(|c| c.as_str()).collect(),
            OperationFamily::Clean => CleanOperation::ALL.iter().map(|c| c.as_str()).collect(),
            OperationFamily::Analyze => AnalysisType::ALL.iter().map(|c| c.as_str()).collect(),
            OperationFamily::Encode => EncodingType::ALL.iter().map(|c| c.as_str()).collect(),
            OperationFamily::Generate => GenerationType::ALL.iter().map(|c| c.as_str()).collect(),
        }
    }

    /// Parse from an MCP tool name
    pub fn from_tool_name(name: &str) -> Option<OperationFamily> {
        OperationFamily::all()
            .into_iter()
            .find(|family| family.tool_name() == name)
    }
}

impl fmt::Display for OperationFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OperationFamily::Case => "case",
            OperationFamily::Clean => "clean",
            OperationFamily::Analyze => "analyze",
            OperationFamily::Encode => "encode",
            OperationFamily::Generate => "generate",
        };
        write!(f, "{}", name)
    }
}

/// Declares a closed operation enum whose string tags parse through `FromStr`,
/// failing with `Error::UnknownOperation` for the given family.
macro_rules! operation_enum {
    (
        $(#[$meta:meta])*
        $name:ident in $family:expr => {
            $( $(#[$vmeta:meta])* $variant:ident = $tag:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $tag)]
                $variant,
            )+
        }

        impl $name {
            /// Every variant, in declaration order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The wire name of this operation
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $tag,)+
                }
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self> {
                match s {
                    $($tag => Ok($name::$variant),)+
                    other => Err(Error::unknown_operation($family, other)),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

operation_enum! {
    /// Target case formats
    CaseType in OperationFamily::Case => {
        Upper = "upper",
        Lower = "lower",
        Title = "title",
        Camel = "camel",
        Pascal = "pascal",
        Snake = "snake",
        Kebab = "kebab",
        Constant = "constant",
    }
}

operation_enum! {
    /// Whitespace cleaning operations
    CleanOperation in OperationFamily::Clean => {
        RemoveExtraSpaces = "remove_extra_spaces",
        TrimLines = "trim_lines",
        RemoveEmptyLines = "remove_empty_lines",
        SmartClean = "smart_clean",
    }
}

operation_enum! {
    /// Analysis kinds
    AnalysisType in OperationFamily::Analyze => {
        BasicStats = "basic_stats",
        FullReport = "full_report",
    }
}

operation_enum! {
    /// Encoding conversions
    EncodingType in OperationFamily::Encode => {
        Base64Encode = "base64_encode",
        Base64Decode = "base64_decode",
        UrlEncode = "url_encode",
        UrlDecode = "url_decode",
    }
}

operation_enum! {
    /// Synthetic text kinds
    GenerationType in OperationFamily::Generate => {
        LoremIpsum = "lorem_ipsum",
        Password = "password",
        Uuid = "uuid",
    }
}

/// A fully validated operation: one family plus one of its variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Case(CaseType),
    Clean(CleanOperation),
    Analyze(AnalysisType),
    Encode(EncodingType),
    Generate(GenerationType),
}

impl Operation {
    /// Parse an operation name within a family
    pub fn parse(family: OperationFamily, name: &str) -> Result<Operation> {
        Ok(match family {
            OperationFamily::Case => Operation::Case(name.parse()?),
            OperationFamily::Clean => Operation::Clean(name.parse()?),
            OperationFamily::Analyze => Operation::Analyze(name.parse()?),
            OperationFamily::Encode => Operation::Encode(name.parse()?),
            OperationFamily::Generate => Operation::Generate(name.parse()?),
        })
    }

    pub fn family(&self) -> OperationFamily {
        match self {
            Operation::Case(_) => OperationFamily::Case,
            Operation::Clean(_) => OperationFamily::Clean,
            Operation::Analyze(_) => OperationFamily::Analyze,
            Operation::Encode(_) => OperationFamily::Encode,
            Operation::Generate(_) => OperationFamily::Generate,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Operation::Case(op) => op.as_str(),
            Operation::Clean(op) => op.as_str(),
            Operation::Analyze(op) => op.as_str(),
            Operation::Encode(op) => op.as_str(),
            Operation::Generate(op) => op.as_str(),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.family(), self.name())
    }
}
