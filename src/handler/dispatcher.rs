use crate::{
    configuration::{Config, State},
    handler::{account_info, history_scanner},
    helpers::format_fixed,
    model::{
        AccountInfo, Embed, EmbedField, EmbedFooter, EmbedMedia, HistoryKind,
        HistoryScan, Reply,
    },
    types::{ChatAuthor, ChatMessage},
};

const EMBED_COLOR: u32 = 0x0099ff;

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    User(Option<String>),
    Ping,
}

impl Command {
    pub fn parse(content: &str) -> Option<Command> {
        let mut parts = content.split_whitespace();

        match parts.next()? {
            "!user" => {
                let user = parts
                    .next()
                    .map(|user| user.trim_start_matches('@').to_lowercase())
                    .filter(|user| !user.is_empty());
                Some(Command::User(user))
            },
            "!ping" if parts.next().is_none() => Some(Command::Ping),
            _ => None,
        }
    }
}

/// Answers a chat message. Unrecognized messages get no reply; recognized
/// commands always get one.
pub async fn dispatch(state: &State, message: &ChatMessage) -> Option<Reply> {
    let reply = match Command::parse(&message.content)? {
        Command::Ping => Reply::reply_to(String::from("Pong!")),
        Command::User(None) => {
            Reply::text(String::from("Please specify a user to get info."))
        },
        Command::User(Some(user)) => {
            user_reply(state, &user, &message.author).await
        },
    };

    Some(reply)
}

pub async fn user_reply(
    state: &State,
    user: &str,
    author: &ChatAuthor,
) -> Reply {
    let chain = state.chain.as_ref();

    let (account, posts, comments, csi) = tokio::join!(
        account_info::fetch(chain, user),
        history_scanner::scan_recent(chain, user, HistoryKind::Post),
        history_scanner::scan_recent(chain, user, HistoryKind::Comment),
        state.reputation.score(user),
    );

    match account.found() {
        Some(info) => Reply::embed(user_embed(
            &state.config,
            user,
            author,
            &info,
            &posts,
            &comments,
            csi,
        )),
        None => Reply::text(format!("No account data found for @{}", user)),
    }
}

fn user_embed(
    config: &Config,
    user: &str,
    author: &ChatAuthor,
    info: &AccountInfo,
    posts: &HistoryScan,
    comments: &HistoryScan,
    csi: Option<f64>,
) -> Embed {
    let delegated = format!(
        "{} ({}%)",
        format_fixed(info.delegated_hp, 3),
        format_fixed(info.delegated_percentage(), 2)
    );
    let power_down = if info.is_power_down { "Yes" } else { "No" };
    let csi = csi
        .map(|score| score.to_string())
        .unwrap_or_else(|| String::from("n/a"));

    let fields = vec![
        EmbedField::new("HP", format_fixed(info.hp, 3)),
        EmbedField::new("HP Delegated", delegated),
        EmbedField::spacer(),
        EmbedField::line_break(),
        EmbedField::new("KE", format_fixed(info.ke, 3)),
        EmbedField::new("Power Down", power_down.to_owned()),
        EmbedField::spacer(),
        EmbedField::line_break(),
        EmbedField::new("Posts 30 days", posts.total_items().to_string()),
        EmbedField::new("reward.app", posts.total_reward_app.to_string()),
        EmbedField::new("Self Votes", posts.total_self_votes.to_string()),
        EmbedField::line_break(),
        EmbedField::new("Comments 30 days", comments.total_items().to_string()),
        EmbedField::new("reward.app", comments.total_reward_app.to_string()),
        EmbedField::new("Self Votes", comments.total_self_votes.to_string()),
        EmbedField::line_break(),
        EmbedField::new("CSI Score 30 days", csi),
    ];

    Embed {
        color: EMBED_COLOR,
        title: format!("@{}", user),
        url: config.get_profile_url(user),
        thumbnail: EmbedMedia {
            url: config.get_avatar_url(user),
        },
        fields,
        footer: EmbedFooter {
            text: format!("Requested by {}", author.display_name),
            icon_url: author.avatar_url.to_owned(),
        },
    }
}
