table! {
    users (id) {
        id -> Int4,
        username -> Varchar,
        password -> Varchar,
    }
}

table! {
    reviews (id) {
        id -> Int4,
        movie_title -> Varchar,
        review_text -> Text,
        user_id -> Int4,
    }
}

joinable!(reviews -> users (user_id));

allow_tables_to_appear_in_same_query!(users, reviews);
