mod interaction;
pub use interaction::{
    ApplicationCommandInteraction, Interaction, InteractionType, MessageComponentInteraction,
    MessageComponentInteractionData, PingInteraction,
};

mod application_command_type;
pub use application_command_type::ApplicationCommandType;

mod application_command_option_type;
pub use application_command_option_type::ApplicationCommandOptionType;

mod application_command_interaction_data;
pub use application_command_interaction_data::ApplicationCommandInteractionData;

mod application_command_interaction_data_option;
pub use application_command_interaction_data_option::ApplicationCommandInteractionDataOption;

mod application_command_interaction_data_resolved;
pub use application_command_interaction_data_resolved::ApplicationCommandInteractionDataResolved;

mod component_type;
pub use component_type::ComponentType;

mod interaction_response;
pub use interaction_response::{InteractionResponse, InteractionResponseType};
