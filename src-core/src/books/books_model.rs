use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{Error, Result, ValidationError};
use crate::indicators::goal_matrix::GoalMatrix;
use crate::indicators::indicators_model::{IndicatorDefinition, NewIndicator};
use crate::indicators::time_series::{IndicatorTimeSeries, MissingGoalPolicy};
use crate::portfolio::portfolio_aggregator::IndicatorSnapshot;

pub const MAX_INDICATORS_PER_BOOK: usize = 6;
pub const MIN_BOOK_YEAR: i32 = 2000;
pub const MAX_BOOK_YEAR: i32 = 2100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OwnerKind {
    Person,
    Team,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Owner {
    pub kind: OwnerKind,
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookIndicator {
    pub definition: IndicatorDefinition,
    #[serde(flatten)]
    pub matrix: GoalMatrix,
}

impl BookIndicator {
    pub fn id(&self) -> &str {
        &self.definition.id
    }

    pub fn time_series(&self, policy: MissingGoalPolicy) -> IndicatorTimeSeries {
        self.matrix.time_series(policy)
    }

    pub fn snapshot(&self, policy: MissingGoalPolicy) -> IndicatorSnapshot {
        IndicatorSnapshot {
            accumulated_percentage: self.time_series(policy).accumulated().percentage(),
            direction: self.definition.direction,
        }
    }
}

impl TryFrom<NewIndicator> for BookIndicator {
    type Error = Error;

    fn try_from(new_indicator: NewIndicator) -> Result<Self> {
        let name = new_indicator.name.trim();
        if name.is_empty() {
            return Err(Error::invalid_input("Indicator name must not be empty"));
        }

        Ok(BookIndicator {
            definition: IndicatorDefinition {
                id: Uuid::new_v4().to_string(),
                name: name.to_string(),
                unit: new_indicator.unit,
                direction: new_indicator.direction,
                editable: new_indicator.editable,
            },
            matrix: GoalMatrix::new(new_indicator.goals, new_indicator.actuals),
        })
    }
}

/// A year of indicators assigned to one person or team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: String,
    pub title: String,
    pub owner: Owner,
    pub year: i32,
    pub indicators: Vec<BookIndicator>,
    pub last_update: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
}

impl Book {
    pub fn indicator(&self, indicator_id: &str) -> Option<&BookIndicator> {
        self.indicators.iter().find(|i| i.id() == indicator_id)
    }

    pub fn indicator_mut(&mut self, indicator_id: &str) -> Result<&mut BookIndicator> {
        let book_id = self.id.clone();
        self.indicators
            .iter_mut()
            .find(|i| i.definition.id == indicator_id)
            .ok_or_else(|| {
                log::warn!("Indicator {} not found in book {}", indicator_id, book_id);
                Error::not_found("Indicator", indicator_id)
            })
    }

    pub fn time_series(&self, policy: MissingGoalPolicy) -> Vec<IndicatorTimeSeries> {
        self.indicators.iter().map(|i| i.time_series(policy)).collect()
    }

    pub fn snapshots(&self, policy: MissingGoalPolicy) -> Vec<IndicatorSnapshot> {
        self.indicators.iter().map(|i| i.snapshot(policy)).collect()
    }

    pub fn push_indicator(&mut self, indicator: BookIndicator) -> Result<()> {
        if self.indicators.len() >= MAX_INDICATORS_PER_BOOK {
            return Err(ValidationError::TooManyIndicators {
                max: MAX_INDICATORS_PER_BOOK,
            }
            .into());
        }
        self.indicators.push(indicator);
        Ok(())
    }

    pub fn remove_indicator(&mut self, indicator_id: &str) -> Result<BookIndicator> {
        let position = self
            .indicators
            .iter()
            .position(|i| i.id() == indicator_id)
            .ok_or_else(|| Error::not_found("Indicator", indicator_id))?;
        if self.indicators.len() == 1 {
            return Err(ValidationError::LastIndicator.into());
        }
        Ok(self.indicators.remove(position))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBook {
    pub title: String,
    pub owner: Owner,
    pub year: i32,
    pub indicators: Vec<NewIndicator>,
}

impl NewBook {
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(Error::invalid_input("Book title must not be empty"));
        }
        if self.owner.name.trim().is_empty() {
            return Err(Error::invalid_input("Book owner name must not be empty"));
        }
        if !(MIN_BOOK_YEAR..=MAX_BOOK_YEAR).contains(&self.year) {
            return Err(Error::invalid_input(format!(
                "Book year {} is outside {}..={}",
                self.year, MIN_BOOK_YEAR, MAX_BOOK_YEAR
            )));
        }
        if self.indicators.is_empty() {
            return Err(Error::invalid_input("A book needs at least one indicator"));
        }
        if self.indicators.len() > MAX_INDICATORS_PER_BOOK {
            return Err(ValidationError::TooManyIndicators {
                max: MAX_INDICATORS_PER_BOOK,
            }
            .into());
        }
        Ok(())
    }

    pub fn into_book(self, created_at: NaiveDateTime) -> Result<Book> {
        self.validate()?;
        let indicators = self
            .indicators
            .into_iter()
            .map(BookIndicator::try_from)
            .collect::<Result<Vec<_>>>()?;

        Ok(Book {
            id: Uuid::new_v4().to_string(),
            title: self.title.trim().to_string(),
            owner: self.owner,
            year: self.year,
            indicators,
            last_update: None,
            created_at,
        })
    }
}
