//! SQL schemas for both variants.
//!
//! Executed once at connection startup. `PRAGMA foreign_keys` is
//! per-connection in SQLite, so it is part of each schema batch. Future
//! migrations will be gated on `PRAGMA user_version`.

/// "Project Harmony" schema; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
///
/// Identifiers keep their quoted PascalCase spelling because rows are handed
/// to clients under those names.
pub const HARMONY_SCHEMA: &str = r#"
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS "User" (
    "UserID"                  INTEGER PRIMARY KEY AUTOINCREMENT,
    "Name"                    TEXT NOT NULL,
    "Email"                   TEXT NOT NULL UNIQUE,
    "Password_Hash"           TEXT NOT NULL,
    "Role"                    TEXT NOT NULL DEFAULT 'Member',
    "Status"                  TEXT NOT NULL DEFAULT 'Pending',
    "Moderator_Expiry_Date"   TEXT,
    "Legacy_Appointee_UserID" INTEGER REFERENCES "User"("UserID")
);

CREATE TABLE IF NOT EXISTS "Invite" (
    "InviteID"         INTEGER PRIMARY KEY AUTOINCREMENT,
    "InvitedBy_UserID" INTEGER NOT NULL REFERENCES "User"("UserID"),
    "Invitee_Email"    TEXT NOT NULL,
    "Status"           TEXT NOT NULL,
    "Denial_Reason"    TEXT,
    "Created_At"       TEXT NOT NULL    -- RFC 3339 UTC; server-assigned
);

CREATE TABLE IF NOT EXISTS "Group" (
    "GroupID"          INTEGER PRIMARY KEY AUTOINCREMENT,
    "GroupName"        TEXT NOT NULL,
    "GroupType"        TEXT NOT NULL DEFAULT 'Secret',
    "CreatedBy_UserID" INTEGER NOT NULL REFERENCES "User"("UserID")
);

-- Pure join table.
CREATE TABLE IF NOT EXISTS "Group_Member" (
    "GroupID" INTEGER NOT NULL REFERENCES "Group"("GroupID") ON DELETE CASCADE,
    "UserID"  INTEGER NOT NULL REFERENCES "User"("UserID") ON DELETE CASCADE,
    PRIMARY KEY ("GroupID", "UserID")
);

CREATE TABLE IF NOT EXISTS "Person" (
    "PersonID"       INTEGER PRIMARY KEY AUTOINCREMENT,
    "Name"           TEXT NOT NULL,
    "BirthDate"      TEXT,             -- YYYY-MM-DD
    "DeathDate"      TEXT,             -- YYYY-MM-DD
    "Biography"      TEXT,
    "Profile_UserID" INTEGER REFERENCES "User"("UserID")
);

-- Edges of the family graph. No symmetry or cycle constraint.
CREATE TABLE IF NOT EXISTS "Relationship" (
    "RelationshipID"   INTEGER PRIMARY KEY AUTOINCREMENT,
    "Person1_ID"       INTEGER NOT NULL REFERENCES "Person"("PersonID"),
    "Person2_ID"       INTEGER NOT NULL REFERENCES "Person"("PersonID"),
    "RelationshipType" TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS "Media_Album" (
    "AlbumID"          INTEGER PRIMARY KEY AUTOINCREMENT,
    "AlbumName"        TEXT NOT NULL,
    "Description"      TEXT,
    "CreatedBy_UserID" INTEGER NOT NULL REFERENCES "User"("UserID")
);

CREATE TABLE IF NOT EXISTS "Media_Item" (
    "ItemID"              INTEGER PRIMARY KEY AUTOINCREMENT,
    "AlbumID"             INTEGER NOT NULL REFERENCES "Media_Album"("AlbumID") ON DELETE CASCADE,
    "UploadedBy_UserID"   INTEGER NOT NULL REFERENCES "User"("UserID"),
    "File_URL"            TEXT NOT NULL,
    "Description_Caption" TEXT,
    "Date_Taken"          TEXT,
    "Post_Status"         TEXT NOT NULL DEFAULT 'Visible'
);

CREATE TABLE IF NOT EXISTS "Timeline_Event" (
    "EventID"          INTEGER PRIMARY KEY AUTOINCREMENT,
    "EventDate"        TEXT NOT NULL,
    "Title"            TEXT NOT NULL,
    "Story"            TEXT,
    "CreatedBy_UserID" INTEGER NOT NULL REFERENCES "User"("UserID"),
    "Post_Status"      TEXT NOT NULL DEFAULT 'Visible'
);

CREATE TABLE IF NOT EXISTS "Direct_Message" (
    "MessageID"        INTEGER PRIMARY KEY AUTOINCREMENT,
    "Sender_UserID"    INTEGER NOT NULL REFERENCES "User"("UserID"),
    "Recipient_UserID" INTEGER NOT NULL REFERENCES "User"("UserID"),
    "Message_Content"  TEXT NOT NULL,
    "Timestamp"        TEXT NOT NULL,
    "Message_Status"   TEXT NOT NULL DEFAULT 'Sent'
);

CREATE TABLE IF NOT EXISTS "Memorial_Tribute" (
    "TributeID"         INTEGER PRIMARY KEY AUTOINCREMENT,
    "Deceased_PersonID" INTEGER NOT NULL REFERENCES "Person"("PersonID") ON DELETE CASCADE,
    "PostedBy_UserID"   INTEGER NOT NULL REFERENCES "User"("UserID"),
    "Tribute_Content"   TEXT NOT NULL,
    "Timestamp"         TEXT NOT NULL,
    "Post_Status"       TEXT NOT NULL DEFAULT 'Visible'
);

CREATE INDEX IF NOT EXISTS media_item_album_idx   ON "Media_Item"("AlbumID");
CREATE INDEX IF NOT EXISTS tribute_person_idx     ON "Memorial_Tribute"("Deceased_PersonID");
CREATE INDEX IF NOT EXISTS message_recipient_idx  ON "Direct_Message"("Recipient_UserID");

PRAGMA user_version = 1;
"#;

/// "Family Legacy" schema. Every child table cascades from `families`.
pub const LEGACY_SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS families (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    family_code TEXT NOT NULL UNIQUE,  -- human-chosen tenant key
    created_at  TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS family_members (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    family_code TEXT NOT NULL REFERENCES families(family_code) ON DELETE CASCADE,
    name        TEXT NOT NULL,
    role        TEXT NOT NULL,          -- 'admin' | 'member'
    joined_at   TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS tree_members (
    id           INTEGER PRIMARY KEY AUTOINCREMENT,
    family_code  TEXT NOT NULL REFERENCES families(family_code) ON DELETE CASCADE,
    name         TEXT NOT NULL,
    relationship TEXT,
    birth_date   TEXT,
    bio          TEXT,
    created_by   TEXT,
    created_at   TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS stories (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    family_code TEXT NOT NULL REFERENCES families(family_code) ON DELETE CASCADE,
    title       TEXT NOT NULL,
    author      TEXT,
    content     TEXT NOT NULL,
    tags        TEXT,
    created_by  TEXT,
    created_at  TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS events (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    family_code TEXT NOT NULL REFERENCES families(family_code) ON DELETE CASCADE,
    name        TEXT NOT NULL,
    date        TEXT NOT NULL,
    location    TEXT,
    description TEXT,
    created_by  TEXT,
    created_at  TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS family_members_code_idx ON family_members(family_code);
CREATE INDEX IF NOT EXISTS tree_members_code_idx   ON tree_members(family_code);
CREATE INDEX IF NOT EXISTS stories_code_idx        ON stories(family_code);
CREATE INDEX IF NOT EXISTS events_code_idx         ON events(family_code);

PRAGMA user_version = 1;
";
