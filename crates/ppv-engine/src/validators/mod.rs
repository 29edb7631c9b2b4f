//! Validator strategies, one per rule type.
//!
//! All validators share the signature
//! `evaluate(rule, context, resolver) -> Verdict` and the four terminal
//! verdict constructors. They only read the context; malformed or missing
//! domain data resolves to NOT_APPLICABLE, never an error.

mod credit;
mod homebuyer;
mod property;
mod ratios;
mod seasoning;

use ppv_model::{EvalContext, RuleDef, Verdict};

use crate::resolver::FieldResolver;

/// Closed set of validator variants, bound from the configured name once at
/// engine construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidatorKind {
    Ltv,
    Dti,
    Occupancy,
    SecondHome,
    Investment,
    CreditScore,
    Gift,
    CashoutSeasoning,
    Title,
    Fraud,
    AppraisalPriorSale,
    LoanProgram,
    Cashback,
    HomebuyerProgram,
    HomebuyerLtv,
    Income,
    LienPayoff,
}

impl ValidatorKind {
    /// Bind a configured validator name; unknown names yield `None` and the
    /// engine records the rule in its configuration report.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "LTVValidator" => Some(Self::Ltv),
            "DTIValidator" => Some(Self::Dti),
            "OccupancyValidator" => Some(Self::Occupancy),
            "SecondHomeValidator" => Some(Self::SecondHome),
            "InvestmentValidator" => Some(Self::Investment),
            "CreditScoreValidator" => Some(Self::CreditScore),
            "GiftValidator" => Some(Self::Gift),
            "CashoutSeasoningValidator" => Some(Self::CashoutSeasoning),
            "TitleValidator" => Some(Self::Title),
            "FraudValidator" => Some(Self::Fraud),
            "AppraisalPriorSaleValidator" => Some(Self::AppraisalPriorSale),
            "LoanProgramValidator" => Some(Self::LoanProgram),
            "CashbackValidator" => Some(Self::Cashback),
            "HomebuyerProgramValidator" => Some(Self::HomebuyerProgram),
            "HomebuyerLTVValidator" => Some(Self::HomebuyerLtv),
            "IncomeValidator" => Some(Self::Income),
            "LienPayoffValidator" => Some(Self::LienPayoff),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Ltv => "LTVValidator",
            Self::Dti => "DTIValidator",
            Self::Occupancy => "OccupancyValidator",
            Self::SecondHome => "SecondHomeValidator",
            Self::Investment => "InvestmentValidator",
            Self::CreditScore => "CreditScoreValidator",
            Self::Gift => "GiftValidator",
            Self::CashoutSeasoning => "CashoutSeasoningValidator",
            Self::Title => "TitleValidator",
            Self::Fraud => "FraudValidator",
            Self::AppraisalPriorSale => "AppraisalPriorSaleValidator",
            Self::LoanProgram => "LoanProgramValidator",
            Self::Cashback => "CashbackValidator",
            Self::HomebuyerProgram => "HomebuyerProgramValidator",
            Self::HomebuyerLtv => "HomebuyerLTVValidator",
            Self::Income => "IncomeValidator",
            Self::LienPayoff => "LienPayoffValidator",
        }
    }

    /// Run this validator for one rule against one context.
    pub fn evaluate(
        &self,
        rule: &RuleDef,
        context: &EvalContext,
        resolver: &FieldResolver,
    ) -> Verdict {
        match self {
            Self::Ltv => ratios::ltv(rule, context, resolver),
            Self::Dti => ratios::dti(rule, context, resolver),
            Self::Cashback => ratios::cashback(rule, context, resolver),
            Self::Income => ratios::income(rule, context, resolver),
            Self::Occupancy => property::occupancy(rule, context, resolver),
            Self::SecondHome => property::second_home(rule, context, resolver),
            Self::Investment => property::investment(rule, context, resolver),
            Self::LoanProgram => property::loan_program(rule, context, resolver),
            Self::CreditScore => credit::credit_score(rule, context, resolver),
            Self::Gift => credit::gift(rule, context, resolver),
            Self::LienPayoff => credit::lien_payoff(rule, context, resolver),
            Self::CashoutSeasoning => seasoning::cashout_seasoning(rule, context, resolver),
            Self::Title => seasoning::title(rule, context, resolver),
            Self::Fraud => seasoning::fraud(rule, context, resolver),
            Self::AppraisalPriorSale => seasoning::appraisal_prior_sale(rule, context, resolver),
            Self::HomebuyerProgram => homebuyer::program(rule, context, resolver),
            Self::HomebuyerLtv => homebuyer::ltv_education(rule, context, resolver),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        let kinds = [
            ValidatorKind::Ltv,
            ValidatorKind::Dti,
            ValidatorKind::Occupancy,
            ValidatorKind::SecondHome,
            ValidatorKind::Investment,
            ValidatorKind::CreditScore,
            ValidatorKind::Gift,
            ValidatorKind::CashoutSeasoning,
            ValidatorKind::Title,
            ValidatorKind::Fraud,
            ValidatorKind::AppraisalPriorSale,
            ValidatorKind::LoanProgram,
            ValidatorKind::Cashback,
            ValidatorKind::HomebuyerProgram,
            ValidatorKind::HomebuyerLtv,
            ValidatorKind::Income,
            ValidatorKind::LienPayoff,
        ];
        for kind in kinds {
            assert_eq!(ValidatorKind::from_name(kind.name()), Some(kind));
        }
        assert_eq!(ValidatorKind::from_name("NoSuchValidator"), None);
    }
}
