use crate::{
    errors::ArgumentError,
    resolver::{ResolvedArgument, Resolver},
    types::Scalar,
};

fn literal<'a>(
    argument: &'a ResolvedArgument,
    index: usize,
    expected: &'static str,
) -> Result<&'a Scalar, ArgumentError> {
    match argument {
        ResolvedArgument::Literal(scalar) => Ok(scalar),
        ResolvedArgument::Instance(_) => Err(ArgumentError::ExpectedLiteral {
            index,
            expected,
            actual: "component",
        }),
    }
}

fn mismatch(index: usize, expected: &'static str, actual: &Scalar) -> ArgumentError {
    ArgumentError::ExpectedLiteral {
        index,
        expected,
        actual: actual.kind(),
    }
}

impl Resolver for Scalar {
    fn resolve(argument: &ResolvedArgument, index: usize) -> Result<Self, ArgumentError> {
        literal(argument, index, "scalar").cloned()
    }
}

impl Resolver for String {
    /// Numbers and bools are accepted and rendered as text
    fn resolve(argument: &ResolvedArgument, index: usize) -> Result<Self, ArgumentError> {
        literal(argument, index, "string").map(Scalar::to_string)
    }
}

impl Resolver for i64 {
    fn resolve(argument: &ResolvedArgument, index: usize) -> Result<Self, ArgumentError> {
        match literal(argument, index, "int")? {
            Scalar::Int(value) => Ok(*value),
            other => Err(mismatch(index, "int", other)),
        }
    }
}

impl Resolver for f64 {
    fn resolve(argument: &ResolvedArgument, index: usize) -> Result<Self, ArgumentError> {
        match literal(argument, index, "float")? {
            Scalar::Float(value) => Ok(*value),
            Scalar::Int(value) => Ok(*value as f64),
            other => Err(mismatch(index, "float", other)),
        }
    }
}

impl Resolver for bool {
    fn resolve(argument: &ResolvedArgument, index: usize) -> Result<Self, ArgumentError> {
        match literal(argument, index, "bool")? {
            Scalar::Bool(value) => Ok(*value),
            other => Err(mismatch(index, "bool", other)),
        }
    }
}
