use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use crate::connection::{serialize, ConnectionFieldSet};

/// Option name -> value, as handed to the notification-target settings.
/// Empty values are never present.
pub type ConfigOptionMap = BTreeMap<String, String>;

type Subscriber = Rc<dyn Fn(&ConfigOptionMap)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Layout of stored events. `namespace` reflects the current bucket/object
/// list, `access` keeps a journal of object operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventFormat {
    #[default]
    Namespace,
    Access,
}

impl EventFormat {
    pub const ALL: [EventFormat; 2] = [EventFormat::Namespace, EventFormat::Access];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventFormat::Namespace => "namespace",
            EventFormat::Access => "access",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EventFormat::Namespace => "Namespace",
            EventFormat::Access => "Access",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|format| format.as_str() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Password,
    Number,
    Multiline,
    Select,
    Radio,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatabaseSinkField {
    ConnectionString,
    Host,
    DbName,
    Port,
    SslMode,
    User,
    Password,
    Table,
    Format,
    QueueDir,
    QueueLimit,
    Comment,
}

impl DatabaseSinkField {
    const CONNECTION_PARTS: [DatabaseSinkField; 6] = [
        DatabaseSinkField::Host,
        DatabaseSinkField::DbName,
        DatabaseSinkField::Port,
        DatabaseSinkField::SslMode,
        DatabaseSinkField::User,
        DatabaseSinkField::Password,
    ];

    const TARGET_OPTIONS: [DatabaseSinkField; 5] = [
        DatabaseSinkField::Table,
        DatabaseSinkField::Format,
        DatabaseSinkField::QueueDir,
        DatabaseSinkField::QueueLimit,
        DatabaseSinkField::Comment,
    ];

    /// html id of the input
    pub fn id(&self) -> &'static str {
        match self {
            DatabaseSinkField::ConnectionString => "connection-string",
            DatabaseSinkField::Host => "host",
            DatabaseSinkField::DbName => "db-name",
            DatabaseSinkField::Port => "port",
            DatabaseSinkField::SslMode => "sslmode",
            DatabaseSinkField::User => "user",
            DatabaseSinkField::Password => "password",
            DatabaseSinkField::Table => "table",
            DatabaseSinkField::Format => "format",
            DatabaseSinkField::QueueDir => "queue-dir",
            DatabaseSinkField::QueueLimit => "queue-limit",
            DatabaseSinkField::Comment => "comment",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DatabaseSinkField::ConnectionString => "Connection String",
            DatabaseSinkField::Host => "Host",
            DatabaseSinkField::DbName => "DB Name",
            DatabaseSinkField::Port => "Port",
            DatabaseSinkField::SslMode => "SSL Mode",
            DatabaseSinkField::User => "User",
            DatabaseSinkField::Password => "Password",
            DatabaseSinkField::Table => "Table",
            DatabaseSinkField::Format => "Format",
            DatabaseSinkField::QueueDir => "Queue Dir",
            DatabaseSinkField::QueueLimit => "Queue Limit",
            DatabaseSinkField::Comment => "Comment",
        }
    }

    pub fn tooltip(&self) -> Option<&'static str> {
        match self {
            DatabaseSinkField::Table => Some(
                "DB table name to store/update events, table is auto-created",
            ),
            DatabaseSinkField::Format => Some(
                "'namespace' reflects current bucket/object list and 'access' \
                 reflects a journal of object operations, defaults to \
                 'namespace'",
            ),
            DatabaseSinkField::QueueDir => Some(
                "staging dir for undelivered messages e.g. '/home/events'",
            ),
            DatabaseSinkField::QueueLimit => Some(
                "maximum limit for undelivered messages, defaults to '10000'",
            ),
            _ => None,
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            DatabaseSinkField::Password => FieldKind::Password,
            DatabaseSinkField::QueueLimit => FieldKind::Number,
            DatabaseSinkField::Comment => FieldKind::Multiline,
            DatabaseSinkField::SslMode => FieldKind::Select,
            DatabaseSinkField::Format => FieldKind::Radio,
            _ => FieldKind::Text,
        }
    }

    /// Name of the option this field is exported under, if any.
    pub fn option_key(&self) -> Option<&'static str> {
        match self {
            DatabaseSinkField::ConnectionString => Some("connection_string"),
            DatabaseSinkField::Table => Some("table"),
            DatabaseSinkField::Format => Some("format"),
            DatabaseSinkField::QueueDir => Some("queue_dir"),
            DatabaseSinkField::QueueLimit => Some("queue_limit"),
            DatabaseSinkField::Comment => Some("comment"),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseSinkAction {
    Set(DatabaseSinkField, String),
    SetFormat(EventFormat),
    UseConnectionString(bool),
}

/// Settings panel of a postgres notification target.
///
/// Edits go through [`DatabaseSinkForm::apply`]. While the raw connection
/// string is not in use, every change of a connection part re-derives the
/// connection string. Whenever one of the exported values changes and the
/// connection string is not empty, the full option map is sent to all
/// subscribers.
#[derive(Clone)]
pub struct DatabaseSinkForm {
    use_connection_string: bool,
    fields: ConnectionFieldSet,
    connection_string: String,
    table: String,
    format: EventFormat,
    queue_dir: String,
    queue_limit: String,
    comment: String,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl fmt::Debug for DatabaseSinkForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseSinkForm")
            .field("use_connection_string", &self.use_connection_string)
            .field("fields", &self.fields)
            .field("connection_string", &self.connection_string)
            .field("table", &self.table)
            .field("format", &self.format)
            .field("queue_dir", &self.queue_dir)
            .field("queue_limit", &self.queue_limit)
            .field("comment", &self.comment)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl Default for DatabaseSinkForm {
    fn default() -> Self {
        Self::new()
    }
}

impl DatabaseSinkForm {
    pub fn new() -> Self {
        let fields = ConnectionFieldSet::default();
        let connection_string = serialize(&fields);
        Self {
            use_connection_string: false,
            fields,
            connection_string,
            table: String::new(),
            format: EventFormat::default(),
            queue_dir: String::new(),
            queue_limit: String::new(),
            comment: String::new(),
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn uses_connection_string(&self) -> bool {
        self.use_connection_string
    }

    pub fn fields(&self) -> &ConnectionFieldSet {
        &self.fields
    }

    pub fn connection_string(&self) -> &str {
        &self.connection_string
    }

    pub fn format(&self) -> EventFormat {
        self.format
    }

    pub fn value(&self, field: DatabaseSinkField) -> &str {
        match field {
            DatabaseSinkField::ConnectionString => &self.connection_string,
            DatabaseSinkField::Host => &self.fields.host,
            DatabaseSinkField::DbName => &self.fields.dbname,
            DatabaseSinkField::Port => &self.fields.port,
            DatabaseSinkField::SslMode => &self.fields.sslmode,
            DatabaseSinkField::User => &self.fields.user,
            DatabaseSinkField::Password => &self.fields.password,
            DatabaseSinkField::Table => &self.table,
            DatabaseSinkField::Format => self.format.as_str(),
            DatabaseSinkField::QueueDir => &self.queue_dir,
            DatabaseSinkField::QueueLimit => &self.queue_limit,
            DatabaseSinkField::Comment => &self.comment,
        }
    }

    /// Inputs to render, in display order, for the current toggle state.
    pub fn visible_fields(&self) -> Vec<DatabaseSinkField> {
        let mut fields = if self.use_connection_string {
            vec![DatabaseSinkField::ConnectionString]
        } else {
            DatabaseSinkField::CONNECTION_PARTS.to_vec()
        };
        fields.extend(DatabaseSinkField::TARGET_OPTIONS);
        fields
    }

    pub fn option_map(&self) -> ConfigOptionMap {
        [
            DatabaseSinkField::ConnectionString,
            DatabaseSinkField::Table,
            DatabaseSinkField::Format,
            DatabaseSinkField::QueueDir,
            DatabaseSinkField::QueueLimit,
            DatabaseSinkField::Comment,
        ]
        .into_iter()
        .filter_map(|field| {
            let value = self.value(field);
            match field.option_key() {
                Some(key) if !value.is_empty() => {
                    Some((key.to_string(), value.to_string()))
                }
                _ => None,
            }
        })
        .collect()
    }

    /// Register a change listener. It receives the current options right
    /// away when a connection string is present.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: Fn(&ConfigOptionMap) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        if !self.connection_string.is_empty() {
            callback(&self.option_map());
        }
        self.subscribers.push((id, Rc::new(callback)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        self.subscribers.len() != before
    }

    /// Apply one input event. Returns the option map when it was sent to
    /// the subscribers.
    pub fn apply(&mut self, action: DatabaseSinkAction) -> Option<ConfigOptionMap> {
        let fields_before = self.fields.clone();
        let options_before = self.option_map();

        match action {
            DatabaseSinkAction::Set(field, value) => self.set(field, value),
            DatabaseSinkAction::SetFormat(format) => self.format = format,
            DatabaseSinkAction::UseConnectionString(true) => {
                self.connection_string = serialize(&self.fields);
                self.use_connection_string = true;
            }
            DatabaseSinkAction::UseConnectionString(false) => {
                self.fields = ConnectionFieldSet::from_connection_string(
                    &self.connection_string,
                );
                self.use_connection_string = false;
            }
        }

        if !self.use_connection_string && self.fields != fields_before {
            self.connection_string = serialize(&self.fields);
            log::debug!("connection string derived from fields");
        }

        let options = self.option_map();
        if self.connection_string.is_empty() || options == options_before {
            return None;
        }
        for (_, subscriber) in self.subscribers.iter() {
            subscriber(&options);
        }
        Some(options)
    }

    fn set(&mut self, field: DatabaseSinkField, value: String) {
        match field {
            DatabaseSinkField::ConnectionString => self.connection_string = value,
            DatabaseSinkField::Host => self.fields.host = value,
            DatabaseSinkField::DbName => self.fields.dbname = value,
            DatabaseSinkField::Port => self.fields.port = value,
            DatabaseSinkField::SslMode => self.fields.sslmode = value,
            DatabaseSinkField::User => self.fields.user = value,
            DatabaseSinkField::Password => self.fields.password = value,
            DatabaseSinkField::Table => self.table = value,
            DatabaseSinkField::Format => match EventFormat::from_value(&value) {
                Some(format) => self.format = format,
                None => log::debug!("ignoring unknown format: {}", value),
            },
            DatabaseSinkField::QueueDir => self.queue_dir = value,
            DatabaseSinkField::QueueLimit => self.queue_limit = value,
            DatabaseSinkField::Comment => self.comment = value,
        }
    }
}
