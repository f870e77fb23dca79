pub mod block_quote;
pub mod code_block;
pub mod heading;
pub mod indent;
pub mod list_item;
pub mod rule;
pub mod table_row;

pub use block_quote::BlockQuote;
pub use code_block::{CodeOpen, CodeTag};
pub use heading::Heading;
pub use indent::Indent;
pub use list_item::{ListItem, ListKind};
pub use rule::Rule;
pub use table_row::TableRow;
