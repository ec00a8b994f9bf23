pub mod book_evaluation;
pub mod book_evaluation_model;
pub mod books_model;
pub mod books_repository;
pub mod books_service;
pub mod books_traits;

pub use book_evaluation::{evaluate_book, evaluate_portfolio};
pub use book_evaluation_model::{
    BookEvaluation, BookSummary, IndicatorEvaluation, PortfolioEvaluation,
};
pub use books_model::{Book, BookIndicator, NewBook, Owner, OwnerKind, MAX_INDICATORS_PER_BOOK};
pub use books_repository::InMemoryBookRepository;
pub use books_service::BookService;
pub use books_traits::{BookEdit, BookRepositoryTrait, BookServiceTrait};
