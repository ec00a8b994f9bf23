use std::sync::Arc;

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;

use crate::books::book_evaluation::{evaluate_book, evaluate_portfolio};
use crate::books::book_evaluation_model::{BookEvaluation, PortfolioEvaluation};
use crate::books::books_model::{Book, BookIndicator, NewBook};
use crate::books::books_traits::{BookEdit, BookRepositoryTrait, BookServiceTrait};
use crate::errors::{Result, ValidationError};
use crate::indicators::indicators_model::NewIndicator;
use crate::indicators::month_model::MonthKey;
use crate::settings::TrackingSettings;

pub struct BookService<T: BookRepositoryTrait> {
    book_repo: Arc<T>,
    settings: TrackingSettings,
}

impl<T: BookRepositoryTrait> BookService<T> {
    pub fn new(book_repo: Arc<T>) -> Self {
        Self::with_settings(book_repo, TrackingSettings::default())
    }

    pub fn with_settings(book_repo: Arc<T>, settings: TrackingSettings) -> Self {
        BookService {
            book_repo,
            settings,
        }
    }

    pub fn settings(&self) -> &TrackingSettings {
        &self.settings
    }

    fn now() -> NaiveDateTime {
        chrono::Local::now().naive_local()
    }

    /// Applies `edit` to one indicator of a book and stamps `last_update`,
    /// atomically with respect to other edits of the same book.
    ///
    /// The stored book only holds goals and actuals, so every later read
    /// rebuilds monthly and accumulated periods together from the same data.
    async fn edit_indicator<'a, F>(
        &self,
        book_id: &str,
        indicator_id: &'a str,
        edit: F,
    ) -> Result<Book>
    where
        F: FnOnce(&mut BookIndicator) -> Result<()> + Send + 'a,
    {
        let edit = indicator_edit(indicator_id, Self::now(), edit);
        self.book_repo.modify_book(book_id, edit).await
    }
}

fn indicator_edit<'a, F>(indicator_id: &'a str, now: NaiveDateTime, edit: F) -> BookEdit<'a>
where
    F: FnOnce(&mut BookIndicator) -> Result<()> + Send + 'a,
{
    Box::new(move |book: &mut Book| {
        edit(book.indicator_mut(indicator_id)?)?;
        book.last_update = Some(now);
        Ok(())
    })
}

#[async_trait]
impl<T: BookRepositoryTrait> BookServiceTrait for BookService<T> {
    fn get_books(&self) -> Result<Vec<Book>> {
        self.book_repo.load_books()
    }

    fn get_book(&self, book_id: &str) -> Result<Book> {
        self.book_repo.get_book(book_id)
    }

    async fn create_book(&self, new_book: NewBook) -> Result<Book> {
        let book = new_book.into_book(Self::now())?;
        log::debug!(
            "Creating book {} for {} with {} indicators",
            book.id,
            book.owner.name,
            book.indicators.len()
        );
        self.book_repo.insert_book(book).await
    }

    async fn delete_book(&self, book_id: &str) -> Result<usize> {
        self.book_repo.delete_book(book_id).await
    }

    async fn add_indicator(&self, book_id: &str, new_indicator: NewIndicator) -> Result<BookIndicator> {
        let indicator = BookIndicator::try_from(new_indicator)?;
        let added = indicator.clone();
        let edit: BookEdit<'_> = Box::new(move |book: &mut Book| {
            book.push_indicator(added).map_err(|e| {
                log::warn!("Rejected new indicator for book {}: {}", book.id, e);
                e
            })
        });
        self.book_repo.modify_book(book_id, edit).await?;
        Ok(indicator)
    }

    async fn remove_indicator(&self, book_id: &str, indicator_id: &str) -> Result<Book> {
        let edit: BookEdit<'_> = Box::new(move |book: &mut Book| {
            book.remove_indicator(indicator_id).map(|_| ())
        });
        self.book_repo.modify_book(book_id, edit).await
    }

    async fn record_actual(
        &self,
        book_id: &str,
        indicator_id: &str,
        month: MonthKey,
        value: Decimal,
    ) -> Result<Book> {
        self.edit_indicator(book_id, indicator_id, |indicator| {
            if !indicator.definition.editable {
                log::warn!(
                    "Refusing manual actual for read-only indicator {}",
                    indicator.definition.id
                );
                return Err(ValidationError::ReadOnlyIndicator(indicator.definition.id.clone()).into());
            }
            indicator.matrix.set_actual(month, value);
            Ok(())
        })
        .await
    }

    async fn set_goal(
        &self,
        book_id: &str,
        indicator_id: &str,
        month: MonthKey,
        value: Option<Decimal>,
    ) -> Result<Book> {
        self.edit_indicator(book_id, indicator_id, |indicator| {
            match value {
                Some(target) => indicator.matrix.set_goal(month, target),
                None => {
                    indicator.matrix.clear_goal(month);
                }
            }
            Ok(())
        })
        .await
    }

    fn evaluate_book(&self, book_id: &str, today: NaiveDate) -> Result<BookEvaluation> {
        let book = self.book_repo.get_book(book_id)?;
        Ok(evaluate_book(&book, today, &self.settings))
    }

    fn portfolio_summary(&self, today: NaiveDate) -> Result<PortfolioEvaluation> {
        let books = self.book_repo.load_books()?;
        Ok(evaluate_portfolio(&books, today, &self.settings))
    }
}
