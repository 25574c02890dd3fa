use crate::interaction::{AckSender, ButtonInteraction, CommandInteraction, ContextMenuInteraction};
use model::interaction::{ApplicationCommandType, ComponentType, Interaction};
use std::convert::TryFrom;
use tracing::debug;

/// One classified interaction, published to the application over the
/// channel returned by [`Server::new`](crate::http::Server::new).
/// Publication does not wait for the handler; the HTTP layer only awaits
/// the interaction's acknowledgement.
#[derive(Debug)]
pub enum Event {
    Command(CommandInteraction),
    ContextMenu(ContextMenuInteraction),
    Button(ButtonInteraction),
}

/// Maps a verified, non-ping payload to its interaction variant. Sub-type
/// discriminants with no variant (select menus, unknown codes) drop the
/// payload: no event, no error.
pub(crate) fn classify(
    interaction: Interaction,
    ack: AckSender,
    http_client: &reqwest::Client,
) -> Option<Event> {
    match interaction {
        // Liveness checks are acknowledged before dispatch runs
        Interaction::Ping(_) => None,

        Interaction::ApplicationCommand(payload) => {
            let command_type = payload
                .data
                .r#type
                .and_then(|raw| ApplicationCommandType::try_from(raw).ok());

            match command_type {
                Some(ApplicationCommandType::ChatInput) => Some(Event::Command(
                    CommandInteraction::new(*payload, ack, http_client),
                )),
                Some(ApplicationCommandType::User) | Some(ApplicationCommandType::Message) => {
                    Some(Event::ContextMenu(ContextMenuInteraction::new(
                        *payload,
                        ack,
                        http_client,
                    )))
                }
                None => {
                    debug!("Dropping application command with unrecognised data type");
                    None
                }
            }
        }

        Interaction::MessageComponent(payload) => {
            let component_type = payload
                .data
                .component_type
                .and_then(|raw| ComponentType::try_from(raw).ok());

            match component_type {
                Some(ComponentType::Button) => Some(Event::Button(ButtonInteraction::new(
                    *payload,
                    ack,
                    http_client,
                ))),
                Some(ComponentType::SelectMenu) => {
                    // No select menu interaction structure exists yet
                    debug!(
                        custom_id = %payload.data.custom_id,
                        "Dropping select menu interaction"
                    );
                    None
                }
                Some(ComponentType::ActionRow) | None => {
                    debug!("Dropping component interaction with unrecognised type");
                    None
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::interaction::InteractionType;
    use model::Snowflake;
    use tokio::sync::oneshot;

    fn classify_json(json: &str) -> Option<Event> {
        let interaction: Interaction = serde_json::from_str(json).unwrap();
        let (ack, _ack_rx) = oneshot::channel();

        classify(interaction, ack, &reqwest::Client::new())
    }

    #[test]
    fn test_chat_input_becomes_command() {
        let event = classify_json(
            r#"{
                "type": 2,
                "id": "1",
                "application_id": "2",
                "token": "tok",
                "data": {
                    "id": "3",
                    "name": "blep",
                    "type": 1,
                    "options": [{"name": "n", "type": 4, "value": 7}]
                }
            }"#,
        );

        match event {
            Some(Event::Command(command)) => {
                assert_eq!(command.command_name.as_deref(), Some("blep"));
                assert_eq!(command.command_id, Some(Snowflake(3)));
                assert_eq!(command.r#type, InteractionType::ApplicationCommand);
                assert!(!command.options.is_sub_command());
                assert_eq!(command.options.get_integer("n"), Some(7));
            }
            other => panic!("expected command event, got {:?}", other),
        }
    }

    #[test]
    fn test_user_command_becomes_context_menu() {
        let event = classify_json(
            r#"{
                "type": 2,
                "token": "tok",
                "data": {
                    "name": "High Five",
                    "type": 2,
                    "target_id": "55",
                    "resolved": {
                        "users": {
                            "55": {"id": "55", "username": "Target", "discriminator": "0001", "avatar": null}
                        }
                    }
                }
            }"#,
        );

        match event {
            Some(Event::ContextMenu(menu)) => {
                assert_eq!(menu.target_id, Some(Snowflake(55)));
                assert_eq!(menu.target_type, Some(ApplicationCommandType::User));
                assert_eq!(menu.options.get_user("user").unwrap().id, Snowflake(55));
            }
            other => panic!("expected context menu event, got {:?}", other),
        }
    }

    #[test]
    fn test_button_component_round_trip() {
        let event = classify_json(
            r#"{
                "type": 3,
                "token": "tok",
                "data": {"custom_id": "click_one", "component_type": 2}
            }"#,
        );

        match event {
            Some(Event::Button(button)) => {
                assert_eq!(&*button.custom_id, "click_one");
                assert_eq!(button.component_type, ComponentType::Button);
            }
            other => panic!("expected button event, got {:?}", other),
        }
    }

    #[test]
    fn test_select_menu_is_dropped() {
        let event = classify_json(
            r#"{
                "type": 3,
                "token": "tok",
                "data": {"custom_id": "pick_one", "component_type": 3}
            }"#,
        );

        assert!(event.is_none());
    }

    #[test]
    fn test_unknown_component_type_is_dropped() {
        let event = classify_json(
            r#"{
                "type": 3,
                "token": "tok",
                "data": {"custom_id": "odd", "component_type": 99}
            }"#,
        );

        assert!(event.is_none());
    }

    #[test]
    fn test_command_without_data_type_is_dropped() {
        let event = classify_json(
            r#"{
                "type": 2,
                "token": "tok",
                "data": {"name": "legacy"}
            }"#,
        );

        assert!(event.is_none());
    }

    #[test]
    fn test_guild_invoker_is_derived_from_member() {
        let event = classify_json(
            r#"{
                "type": 2,
                "token": "tok",
                "guild_id": "9",
                "member": {
                    "nick": null,
                    "roles": [],
                    "user": {"id": "1", "username": "Nelly", "discriminator": "1337", "avatar": null}
                },
                "data": {"name": "blep", "type": 1}
            }"#,
        );

        match event {
            Some(Event::Command(command)) => {
                assert!(command.is_in_guild());
                assert_eq!(command.user.as_ref().unwrap().id, Snowflake(1));
            }
            other => panic!("expected command event, got {:?}", other),
        }
    }
}
