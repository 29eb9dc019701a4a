use std::fmt;

/// The arithmetic operation a `BoundedInt` helper impl is generated for.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Op {
    Add,
    Sub,
    Mul,
    DivRem,
}

impl Op {
    pub const ALL: [Op; 4] = [Op::Add, Op::Sub, Op::Mul, Op::DivRem];

    /// Name of the CLI subcommand.
    pub const fn name(self) -> &'static str {
        match self {
            Op::Add => "add",
            Op::Sub => "sub",
            Op::Mul => "mul",
            Op::DivRem => "div",
        }
    }

    /// Impl name used when the caller does not pick one.
    pub const fn default_impl_name(self) -> &'static str {
        match self {
            Op::Add => "AddImpl",
            Op::Sub => "SubImpl",
            Op::Mul => "MulImpl",
            Op::DivRem => "DivRemImpl",
        }
    }

    /// The Cairo helper trait the generated impl satisfies.
    pub const fn helper_trait(self) -> &'static str {
        match self {
            Op::Add => "AddHelper",
            Op::Sub => "SubHelper",
            Op::Mul => "MulHelper",
            Op::DivRem => "DivRemHelper",
        }
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            Op::Add => "+",
            Op::Sub => "-",
            Op::Mul => "*",
            Op::DivRem => "/",
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
