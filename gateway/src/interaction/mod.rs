mod button;
pub use button::ButtonInteraction;

mod command;
pub use command::CommandInteraction;

mod context_menu;
pub use context_menu::ContextMenuInteraction;

mod option_resolver;
pub use option_resolver::{OptionResolver, ResolvedEntities, ResolvedOption};

mod reply_gate;
pub use reply_gate::ReplyGate;
pub(crate) use reply_gate::AckSender;
