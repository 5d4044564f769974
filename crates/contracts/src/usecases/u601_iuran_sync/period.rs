//! Month/year selection of the iuran sync panel

use crate::usecases::common::{UseCaseError, UseCaseResult};
use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Years offered by the year control. Anything else is rejected.
pub const CANDIDATE_YEARS: [i32; 3] = [2024, 2025, 2026];

/// Calendar month, serialized as its Indonesian name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IuranMonth {
    Januari,
    Februari,
    Maret,
    April,
    Mei,
    Juni,
    Juli,
    Agustus,
    September,
    Oktober,
    November,
    Desember,
}

impl IuranMonth {
    pub const ALL: [IuranMonth; 12] = [
        IuranMonth::Januari,
        IuranMonth::Februari,
        IuranMonth::Maret,
        IuranMonth::April,
        IuranMonth::Mei,
        IuranMonth::Juni,
        IuranMonth::Juli,
        IuranMonth::Agustus,
        IuranMonth::September,
        IuranMonth::Oktober,
        IuranMonth::November,
        IuranMonth::Desember,
    ];

    pub fn name(self) -> &'static str {
        match self {
            IuranMonth::Januari => "Januari",
            IuranMonth::Februari => "Februari",
            IuranMonth::Maret => "Maret",
            IuranMonth::April => "April",
            IuranMonth::Mei => "Mei",
            IuranMonth::Juni => "Juni",
            IuranMonth::Juli => "Juli",
            IuranMonth::Agustus => "Agustus",
            IuranMonth::September => "September",
            IuranMonth::Oktober => "Oktober",
            IuranMonth::November => "November",
            IuranMonth::Desember => "Desember",
        }
    }

    pub fn from_number(number: u32) -> Option<Self> {
        number
            .checked_sub(1)
            .and_then(|idx| Self::ALL.get(idx as usize).copied())
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|m| m.name() == name)
    }
}

impl std::fmt::Display for IuranMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Month and year the manual generate actions operate on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedPeriod {
    pub month: IuranMonth,
    pub year: i32,
}

impl SelectedPeriod {
    /// Period containing `date`. The year is kept as-is even when it is not
    /// one of [`CANDIDATE_YEARS`].
    pub fn current_at(date: NaiveDate) -> Self {
        Self {
            month: IuranMonth::from_number(date.month()).unwrap_or(IuranMonth::Januari),
            year: date.year(),
        }
    }

    /// Period of today's local date
    pub fn current() -> Self {
        Self::current_at(Local::now().date_naive())
    }

    pub fn select_month(&mut self, name: &str) -> UseCaseResult<()> {
        let month = IuranMonth::from_name(name).ok_or_else(|| {
            UseCaseError::validation("Bulan tidak dikenal").with_details(name.to_string())
        })?;
        self.month = month;
        Ok(())
    }

    pub fn select_year(&mut self, year: i32) -> UseCaseResult<()> {
        if !CANDIDATE_YEARS.contains(&year) {
            return Err(UseCaseError::validation("Tahun tidak tersedia")
                .with_details(year.to_string()));
        }
        self.year = year;
        Ok(())
    }

    /// Caption like "Oktober 2026"
    pub fn label(&self) -> String {
        format!("{} {}", self.month, self.year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_numbers() {
        assert_eq!(IuranMonth::from_number(1), Some(IuranMonth::Januari));
        assert_eq!(IuranMonth::from_number(12), Some(IuranMonth::Desember));
        assert_eq!(IuranMonth::from_number(3), Some(IuranMonth::Maret));
        assert_eq!(IuranMonth::from_number(0), None);
        assert_eq!(IuranMonth::from_number(13), None);
    }

    #[test]
    fn test_month_names() {
        assert_eq!(IuranMonth::from_name("Agustus"), Some(IuranMonth::Agustus));
        assert_eq!(IuranMonth::from_name("August"), None);
        assert_eq!(IuranMonth::from_name("maret"), None);
        let names: Vec<&str> = IuranMonth::ALL.iter().map(|m| m.name()).collect();
        assert_eq!(names.first(), Some(&"Januari"));
        assert_eq!(names.last(), Some(&"Desember"));
    }

    #[test]
    fn test_month_serialized_as_name() {
        assert_eq!(
            serde_json::to_string(&IuranMonth::Mei).unwrap(),
            "\"Mei\""
        );
    }

    #[test]
    fn test_current_at() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        let period = SelectedPeriod::current_at(date);
        assert_eq!(period.month, IuranMonth::Oktober);
        assert_eq!(period.year, 2026);
        assert_eq!(period.label(), "Oktober 2026");
    }

    #[test]
    fn test_current_year_outside_candidates_is_kept() {
        let date = NaiveDate::from_ymd_opt(2030, 1, 5).unwrap();
        assert_eq!(SelectedPeriod::current_at(date).year, 2030);
    }

    #[test]
    fn test_select_month_and_year() {
        let mut period = SelectedPeriod::current_at(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        period.select_month("Maret").unwrap();
        period.select_year(2025).unwrap();
        assert_eq!(period.month, IuranMonth::Maret);
        assert_eq!(period.year, 2025);
    }

    #[test]
    fn test_select_year_outside_candidates_rejected() {
        let mut period = SelectedPeriod::current_at(NaiveDate::from_ymd_opt(2025, 2, 1).unwrap());
        for year in [2023, 2027, 0, -1] {
            let err = period.select_year(year).unwrap_err();
            assert_eq!(err.code, "VALIDATION_ERROR");
        }
        assert_eq!(period.year, 2025);
    }

    #[test]
    fn test_select_unknown_month_rejected() {
        let mut period = SelectedPeriod::current_at(NaiveDate::from_ymd_opt(2025, 2, 1).unwrap());
        assert!(period.select_month("Smarch").is_err());
        assert_eq!(period.month, IuranMonth::Februari);
    }
}
