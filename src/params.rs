use bon::Builder;
use garde::Validate;

// =======================================
// RATE PARAMETER STRUCT
// =======================================
#[derive(Debug, Clone, Validate, Builder)]
#[garde(allow_unvalidated)]
pub struct RateParams {
    // Raw quoted rate - interpretation depends on the flags
    // Must be a finite, non-negative number
    #[garde(custom(validate_non_negative))]
    pub raw_rate: f64,

    // Compounding frequency of the quoted rate
    #[garde(custom(validate_positive))]
    pub nominal_period: f64,

    pub is_force_of_interest: bool,
    pub is_simple: bool,
    pub is_discount: bool,
}

impl RateParams {
    /// Validate with cross-field validation using Result<(), garde::Report>
    pub fn validate_all(&self) -> Result<(), garde::Report> {
        self.validate()?;

        let mut errors: ErrorVec = Vec::new();

        // Nominal discount rates cannot reach the compounding frequency: (1 - d/m) must stay positive
        if self.is_discount && !self.is_simple && self.raw_rate >= self.nominal_period {
            errors.push((
                "raw_rate",
                format!(
                    "nominal discount rate {} must be below its nominal period {}",
                    self.raw_rate, self.nominal_period
                ),
            ));
        }

        collect_report(errors)
    }
}

// =======================================
// ANNUITY PARAMETER STRUCT
// =======================================
#[derive(Debug, Clone, Validate, Builder)]
#[garde(allow_unvalidated)]
pub struct AnnuityParams {
    // Number of nominal periods paid
    #[garde(custom(validate_non_negative))]
    pub term: f64,

    // Amount paid per installment - may be negative for outgoing streams
    #[garde(custom(validate_finite))]
    pub installment: f64,

    // Periods per unit time used when converting the rate
    #[garde(custom(validate_positive))]
    pub nominal_period: f64,
}

// =======================================
// VARYING ANNUITY PARAMETER STRUCT
// =======================================
#[derive(Debug, Clone, Validate, Builder)]
#[garde(allow_unvalidated)]
pub struct VaryingAnnuityParams {
    #[garde(custom(validate_finite))]
    pub base_amount: f64,

    // Signed increment per period
    #[garde(custom(validate_finite))]
    pub vary_amount: f64,
}

// =======================================
// LOAN SCHEDULE PARAMETER STRUCT
// =======================================

/// Longest schedule tabulated, in periods (daily payments for over 270 years).
pub const MAX_SCHEDULE_PERIODS: f64 = 100_000.0;

#[derive(Debug, Clone, Validate, Builder)]
#[garde(allow_unvalidated)]
pub struct LoanScheduleParams {
    #[garde(custom(validate_finite))]
    pub loan_amount: f64,

    // Term of the underlying annuity
    #[garde(custom(validate_non_negative))]
    pub term: f64,
}

impl LoanScheduleParams {
    /// Validate with cross-field validation using Result<(), garde::Report>
    pub fn validate_all(&self) -> Result<(), garde::Report> {
        self.validate()?;

        let mut errors: ErrorVec = Vec::new();

        // Schedules are tabulated per whole period
        if self.term.fract() != 0.0 {
            errors.push((
                "term",
                format!(
                    "loan schedule needs a whole number of periods, got term {}",
                    self.term
                ),
            ));
        }

        if self.term > MAX_SCHEDULE_PERIODS {
            errors.push((
                "term",
                format!(
                    "loan schedule term {} exceeds the maximum of {MAX_SCHEDULE_PERIODS} periods",
                    self.term
                ),
            ));
        }

        collect_report(errors)
    }
}

// =======================================
// PRIVATE FUNCTIONS
// =======================================

type ErrorVec = Vec<(&'static str, String)>;

fn collect_report(errors: ErrorVec) -> Result<(), garde::Report> {
    let mut report = garde::Report::new();
    for (path, message) in errors {
        report.append(garde::Path::new(path), garde::Error::new(message));
    }

    if report.is_empty() {
        Ok(())
    } else {
        Err(report)
    }
}

fn validate_finite(value: &f64, _context: &()) -> garde::Result {
    if !value.is_finite() {
        return Err(garde::Error::new(format!("{value} is not a finite number")));
    }
    Ok(())
}

fn validate_non_negative(value: &f64, context: &()) -> garde::Result {
    validate_finite(value, context)?;
    if *value < 0.0 {
        return Err(garde::Error::new(format!("{value} must be non-negative")));
    }
    Ok(())
}

fn validate_positive(value: &f64, context: &()) -> garde::Result {
    validate_finite(value, context)?;
    if *value <= 0.0 {
        return Err(garde::Error::new(format!("{value} must be greater than 0")));
    }
    Ok(())
}
