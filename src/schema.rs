table! {
    containers (id) {
        id -> Text,
        data -> Nullable<Text>,
        created_at -> Text,
        updated_at -> Text,
    }
}

table! {
    sections (id) {
        id -> Text,
        container_id -> Text,
        created_at -> Text,
        updated_at -> Text,
    }
}

joinable!(sections -> containers (container_id));

allow_tables_to_appear_in_same_query!(containers, sections,);
