use rust_decimal::Decimal;

/// Declared income plus the per-category allocations derived from it.
///
/// Allocations are never set individually; see `engine::derive_budgets`.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct BudgetConfig {
    pub(crate) monthly_income: Decimal,
    /// Budgeted categories in display order.
    pub(crate) category_budgets: Vec<(&'static str, Decimal)>,
}

impl BudgetConfig {
    /// Zero income with every budgeted category at zero.
    pub(crate) fn undeclared(categories: &[&'static str]) -> Self {
        Self {
            monthly_income: Decimal::ZERO,
            category_budgets: categories.iter().map(|c| (*c, Decimal::ZERO)).collect(),
        }
    }

    /// Allocation for `category`, or zero when it is not a budgeted category.
    pub(crate) fn budget_for(&self, category: &str) -> Decimal {
        self.category_budgets
            .iter()
            .find(|(name, _)| *name == category)
            .map(|(_, amount)| *amount)
            .unwrap_or(Decimal::ZERO)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum BudgetState {
    #[default]
    Undeclared,
    Declared { monthly_income: Decimal },
}

impl BudgetState {
    pub(crate) fn monthly_income(&self) -> Decimal {
        match self {
            Self::Undeclared => Decimal::ZERO,
            Self::Declared { monthly_income } => *monthly_income,
        }
    }

    pub(crate) fn is_declared(&self) -> bool {
        matches!(self, Self::Declared { .. })
    }
}

impl std::fmt::Display for BudgetState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Undeclared => write!(f, "Undeclared"),
            Self::Declared { .. } => write!(f, "Declared"),
        }
    }
}
