// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

diesel::table! {
    stores (store_id) {
        store_id -> BigInt,
        code -> Text,
        name -> Text,
    }
}

diesel::table! {
    employees (employee_id) {
        employee_id -> BigInt,
        store_id -> BigInt,
        display_name -> Text,
        is_active -> Integer,
        created_at -> Text,
    }
}

diesel::table! {
    roster_days (roster_day_id) {
        roster_day_id -> BigInt,
        store_id -> BigInt,
        date -> Text,
        updated_at -> Text,
    }
}

// `external_shift_uid` (MySQL only, generated) is deliberately not mapped:
// the database derives it and nothing reads it.
diesel::table! {
    shifts (shift_id) {
        shift_id -> BigInt,
        roster_day_id -> BigInt,
        employee_id -> BigInt,
        external_shift_id -> Text,
        start_slot -> Integer,
        end_slot -> Integer,
        breaks_json -> Text,
        roles_json -> Text,
    }
}

diesel::table! {
    accounts (account_id) {
        account_id -> BigInt,
        login_name -> Text,
        display_name -> Text,
        password_hash -> Text,
        store_id -> BigInt,
        role -> Text,
        is_disabled -> Integer,
        created_at -> Text,
        last_login_at -> Nullable<Text>,
    }
}

diesel::table! {
    sessions (session_id) {
        session_id -> BigInt,
        session_token -> Text,
        account_id -> BigInt,
        created_at -> Text,
        last_activity_at -> Text,
        expires_at -> Text,
    }
}

diesel::joinable!(employees -> stores (store_id));
diesel::joinable!(roster_days -> stores (store_id));
diesel::joinable!(shifts -> roster_days (roster_day_id));
diesel::joinable!(shifts -> employees (employee_id));
diesel::joinable!(accounts -> stores (store_id));
diesel::joinable!(sessions -> accounts (account_id));

diesel::allow_tables_to_appear_in_same_query!(
    stores,
    employees,
    roster_days,
    shifts,
    accounts,
    sessions,
);
