use model::guild::Member;
use model::interaction::{
    ApplicationCommandInteractionDataOption, ApplicationCommandInteractionDataResolved,
    ApplicationCommandOptionType,
};
use model::user::User;
use model::Snowflake;
use serde_json::Value;
use std::collections::HashMap;
use std::convert::TryFrom;

/// One node of the resolved argument tree. `options` is present only on
/// sub-command / sub-command-group nodes, `value` only on leaves, and
/// `member` / `user` only on USER-typed leaves with a matching entry in
/// the payload's resolved table.
#[derive(Debug, Clone)]
pub struct ResolvedOption {
    pub name: Box<str>,
    pub r#type: Option<ApplicationCommandOptionType>,
    pub value: Option<Value>,
    pub options: Option<Vec<ResolvedOption>>,
    pub member: Option<Member>,
    pub user: Option<User>,
}

/// The id → entity projection of the payload's resolved table. A table
/// that was absent on the wire stays `None`. Member records are merged
/// with their user record, which the platform delivers separately.
#[derive(Debug, Clone, Default)]
pub struct ResolvedEntities {
    pub members: Option<HashMap<Snowflake, Member>>,
    pub users: Option<HashMap<Snowflake, User>>,
}

/// Read-only view over a command's arguments. When the first option is a
/// sub-command or sub-command-group its nested options become the
/// effective array and its name is captured; the protocol nests at most
/// command → group → sub-command → leaves, so one level suffices.
#[derive(Debug)]
pub struct OptionResolver {
    options: Vec<ResolvedOption>,
    sub_command_name: Option<Box<str>>,
    sub_command_group_name: Option<Box<str>>,
    resolved: ResolvedEntities,
}

impl OptionResolver {
    pub(crate) fn new(
        raw: Vec<ApplicationCommandInteractionDataOption>,
        resolved: Option<&ApplicationCommandInteractionDataResolved>,
    ) -> OptionResolver {
        let mut options: Vec<ResolvedOption> = raw
            .iter()
            .map(|option| transform_option(option, resolved))
            .collect();

        let mut sub_command_name = None;
        let mut sub_command_group_name = None;

        let first_type = options.first().and_then(|o| o.r#type);
        if matches!(
            first_type,
            Some(ApplicationCommandOptionType::SubCommand)
                | Some(ApplicationCommandOptionType::SubCommandGroup)
        ) {
            let mut first = options.remove(0);

            if first_type == Some(ApplicationCommandOptionType::SubCommand) {
                sub_command_name = Some(first.name.clone());
            } else {
                sub_command_group_name = Some(first.name.clone());
            }

            options = first.options.take().unwrap_or_default();
        }

        OptionResolver {
            options,
            sub_command_name,
            sub_command_group_name,
            resolved: transform_resolved(resolved),
        }
    }

    /// Context-menu targets are normalised into the same resolution path:
    /// a single synthesised USER option built from `target_id`. Message
    /// targets have no structure yet and synthesise nothing.
    pub(crate) fn for_context_menu(
        target_id: Option<Snowflake>,
        resolved: Option<&ApplicationCommandInteractionDataResolved>,
    ) -> OptionResolver {
        let mut raw = Vec::new();

        if let (Some(target_id), Some(tables)) = (target_id, resolved) {
            let known_user = tables
                .users
                .as_ref()
                .map_or(false, |users| users.contains_key(&target_id));

            if known_user {
                raw.push(ApplicationCommandInteractionDataOption {
                    name: Box::from("user"),
                    r#type: ApplicationCommandOptionType::User as u8,
                    value: Some(Value::String(target_id.to_string())),
                    options: None,
                });
            }
        }

        OptionResolver::new(raw, resolved)
    }

    /// The effective (flattened) options.
    pub fn options(&self) -> &[ResolvedOption] {
        &self.options
    }

    pub fn resolved(&self) -> &ResolvedEntities {
        &self.resolved
    }

    pub fn is_sub_command(&self) -> bool {
        self.sub_command_name.is_some()
    }

    pub fn is_sub_command_group(&self) -> bool {
        self.sub_command_group_name.is_some()
    }

    pub fn sub_command_name(&self) -> Option<&str> {
        self.sub_command_name.as_deref()
    }

    pub fn sub_command_group_name(&self) -> Option<&str> {
        self.sub_command_group_name.as_deref()
    }

    pub fn get(&self, name: &str) -> Option<&ResolvedOption> {
        self.options.iter().find(|option| &*option.name == name)
    }

    pub fn get_boolean(&self, name: &str) -> Option<bool> {
        self.get_typed(name, ApplicationCommandOptionType::Boolean)?
            .value
            .as_ref()?
            .as_bool()
    }

    pub fn get_integer(&self, name: &str) -> Option<i64> {
        self.get_typed(name, ApplicationCommandOptionType::Integer)?
            .value
            .as_ref()?
            .as_i64()
    }

    pub fn get_number(&self, name: &str) -> Option<f64> {
        self.get_typed(name, ApplicationCommandOptionType::Number)?
            .value
            .as_ref()?
            .as_f64()
    }

    pub fn get_string(&self, name: &str) -> Option<&str> {
        self.get_typed(name, ApplicationCommandOptionType::String)?
            .value
            .as_ref()?
            .as_str()
    }

    pub fn get_user(&self, name: &str) -> Option<&User> {
        self.get_typed(name, ApplicationCommandOptionType::User)?
            .user
            .as_ref()
    }

    pub fn get_member(&self, name: &str) -> Option<&Member> {
        self.get_typed(name, ApplicationCommandOptionType::User)?
            .member
            .as_ref()
    }

    fn get_typed(
        &self,
        name: &str,
        r#type: ApplicationCommandOptionType,
    ) -> Option<&ResolvedOption> {
        self.get(name).filter(|option| option.r#type == Some(r#type))
    }
}

fn transform_option(
    option: &ApplicationCommandInteractionDataOption,
    resolved: Option<&ApplicationCommandInteractionDataResolved>,
) -> ResolvedOption {
    // Unknown numeric codes map to no symbolic type; the typed getters
    // then skip the option instead of anything failing
    let symbolic = ApplicationCommandOptionType::try_from(option.r#type).ok();

    let options = option.options.as_ref().map(|children| {
        children
            .iter()
            .map(|child| transform_option(child, resolved))
            .collect()
    });

    let mut member = None;
    let mut user = None;

    if let Some(tables) = resolved {
        if symbolic == Some(ApplicationCommandOptionType::User) {
            if let Some(id) = option.value.as_ref().and_then(value_as_snowflake) {
                let resolved_user = tables.users.as_ref().and_then(|users| users.get(&id));

                member = tables
                    .members
                    .as_ref()
                    .and_then(|members| members.get(&id))
                    .map(|m| m.clone().with_user(resolved_user.cloned()));

                user = resolved_user.cloned();
            }
        }
    }

    ResolvedOption {
        name: option.name.clone(),
        r#type: symbolic,
        value: option.value.clone(),
        options,
        member,
        user,
    }
}

fn transform_resolved(
    resolved: Option<&ApplicationCommandInteractionDataResolved>,
) -> ResolvedEntities {
    let tables = match resolved {
        Some(tables) => tables,
        None => return ResolvedEntities::default(),
    };

    let members = tables.members.as_ref().map(|members| {
        members
            .iter()
            .map(|(id, member)| {
                let user = tables.users.as_ref().and_then(|users| users.get(id)).cloned();
                (*id, member.clone().with_user(user))
            })
            .collect()
    });

    ResolvedEntities {
        members,
        users: tables.users.clone(),
    }
}

fn value_as_snowflake(value: &Value) -> Option<Snowflake> {
    match value {
        Value::String(s) => s.parse().ok(),
        Value::Number(n) => n.as_u64().map(Snowflake),
        _ => None,
    }
}
