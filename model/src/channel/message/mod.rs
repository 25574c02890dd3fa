mod message;
pub use message::{Attachment, Message};

mod embed;
pub use embed::{Embed, EmbedAuthor, EmbedField, EmbedFooter};
