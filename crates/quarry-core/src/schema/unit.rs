//! Numeric columns whose values are qualified by a unit stored next to them.
//!
//! `quantity` and `size` each have a single sibling unit column. The
//! dimensional columns (`width`, `height`, `length`) are recorded in one of
//! two unit conventions: a per-column unit (`width_unit`) or the shared
//! `dimension_unit`, so a search has to try both.

/// A numeric column and the sibling columns holding its unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitPairing {
    /// One sibling unit column.
    Single {
        column: &'static str,
        unit: &'static str,
    },

    /// A dimensional column with two alternate unit columns.
    Dimensional {
        column: &'static str,
        units: [&'static str; 2],
    },
}

pub const STANDARD: &[UnitPairing] = &[
    UnitPairing::Single {
        column: "quantity",
        unit: "quantity_unit",
    },
    UnitPairing::Single {
        column: "size",
        unit: "size_unit",
    },
    UnitPairing::Dimensional {
        column: "width",
        units: ["width_unit", "dimension_unit"],
    },
    UnitPairing::Dimensional {
        column: "height",
        units: ["height_unit", "dimension_unit"],
    },
    UnitPairing::Dimensional {
        column: "length",
        units: ["length_unit", "dimension_unit"],
    },
];

impl UnitPairing {
    /// Finds the pairing for a column of the standard schema.
    pub fn lookup(column: &str) -> Option<&'static UnitPairing> {
        STANDARD.iter().find(|pairing| pairing.column() == column)
    }

    pub fn column(&self) -> &'static str {
        match self {
            UnitPairing::Single { column, .. } | UnitPairing::Dimensional { column, .. } => *column,
        }
    }

    /// Unit columns, in matching order.
    pub fn unit_columns(&self) -> &[&'static str] {
        match self {
            UnitPairing::Single { unit, .. } => std::slice::from_ref(unit),
            UnitPairing::Dimensional { units, .. } => units,
        }
    }

    pub fn is_dimensional(&self) -> bool {
        matches!(self, UnitPairing::Dimensional { .. })
    }
}
