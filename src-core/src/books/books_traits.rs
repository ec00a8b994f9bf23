use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::books::book_evaluation_model::{BookEvaluation, PortfolioEvaluation};
use crate::books::books_model::{Book, BookIndicator, NewBook};
use crate::errors::Result;
use crate::indicators::indicators_model::NewIndicator;
use crate::indicators::month_model::MonthKey;

/// In-place change to a stored book. An `Err` leaves the book untouched.
pub type BookEdit<'a> = Box<dyn FnOnce(&mut Book) -> Result<()> + Send + 'a>;

/// Opaque storage for books. Reads are synchronous, writes are async.
#[async_trait]
pub trait BookRepositoryTrait: Send + Sync {
    fn load_books(&self) -> Result<Vec<Book>>;
    fn get_book(&self, book_id: &str) -> Result<Book>;
    async fn insert_book(&self, book: Book) -> Result<Book>;
    /// Applies `edit` and stores the result as one step, so concurrent
    /// edits to the same book are serialized rather than overwritten.
    async fn modify_book<'a>(&self, book_id: &str, edit: BookEdit<'a>) -> Result<Book>;
    async fn delete_book(&self, book_id: &str) -> Result<usize>;
}

#[async_trait]
pub trait BookServiceTrait: Send + Sync {
    fn get_books(&self) -> Result<Vec<Book>>;
    fn get_book(&self, book_id: &str) -> Result<Book>;
    async fn create_book(&self, new_book: NewBook) -> Result<Book>;
    async fn delete_book(&self, book_id: &str) -> Result<usize>;
    async fn add_indicator(&self, book_id: &str, new_indicator: NewIndicator) -> Result<BookIndicator>;
    async fn remove_indicator(&self, book_id: &str, indicator_id: &str) -> Result<Book>;
    async fn record_actual(
        &self,
        book_id: &str,
        indicator_id: &str,
        month: MonthKey,
        value: Decimal,
    ) -> Result<Book>;
    /// `None` clears the goal, leaving the month without one.
    async fn set_goal(
        &self,
        book_id: &str,
        indicator_id: &str,
        month: MonthKey,
        value: Option<Decimal>,
    ) -> Result<Book>;
    fn evaluate_book(&self, book_id: &str, today: NaiveDate) -> Result<BookEvaluation>;
    fn portfolio_summary(&self, today: NaiveDate) -> Result<PortfolioEvaluation>;
}
