pub mod source;
pub mod trols_scraper;

pub use source::DocumentSource;
pub use trols_scraper::{TrolsScraper, fetch_match_detail};
