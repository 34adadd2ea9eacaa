diesel::table! {
    customers (id) {
        id -> BigInt,
        full_name -> Text,
        contact_number -> Text,
    }
}

diesel::table! {
    menu_items (id) {
        id -> BigInt,
        dish_name -> Text,
        cost -> Double,
    }
}

diesel::table! {
    customer_orders (id) {
        id -> BigInt,
        customer_id -> BigInt,
        order_notes -> Nullable<Text>,
        order_time -> BigInt,
    }
}

diesel::table! {
    ordered_items (id) {
        id -> BigInt,
        order_id -> BigInt,
        menu_item_id -> BigInt,
    }
}

diesel::joinable!(customer_orders -> customers (customer_id));
diesel::joinable!(ordered_items -> customer_orders (order_id));
diesel::joinable!(ordered_items -> menu_items (menu_item_id));

diesel::allow_tables_to_appear_in_same_query!(
    customers,
    menu_items,
    customer_orders,
    ordered_items,
);
