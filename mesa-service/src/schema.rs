diesel::table! {
    #[sql_name = "Mesa"]
    mesas (mesa_id) {
        #[sql_name = "MesaID"]
        mesa_id -> Int4,
        #[sql_name = "TableNumber"]
        table_number -> Int4,
        #[sql_name = "OpenOrders"]
        open_orders -> Int4,
    }
}

diesel::table! {
    #[sql_name = "ProductType"]
    product_types (product_type_id) {
        #[sql_name = "ProductTypeID"]
        product_type_id -> Int4,
        #[sql_name = "TypeName"]
        type_name -> Text,
    }
}

diesel::table! {
    #[sql_name = "Product"]
    products (product_id) {
        #[sql_name = "ProductID"]
        product_id -> Int4,
        #[sql_name = "Name"]
        name -> Text,
        #[sql_name = "Quantity"]
        quantity -> Int4,
        #[sql_name = "Price"]
        price -> Numeric,
        #[sql_name = "ProductTypeID"]
        product_type_id -> Nullable<Int4>,
    }
}

diesel::table! {
    #[sql_name = "TableOrder"]
    table_orders (order_id) {
        #[sql_name = "OrderID"]
        order_id -> Int4,
        #[sql_name = "MesaID"]
        mesa_id -> Int4,
    }
}

diesel::table! {
    #[sql_name = "OrderProduct"]
    order_products (order_product_id) {
        #[sql_name = "OrderProductID"]
        order_product_id -> Int4,
        #[sql_name = "OrderID"]
        order_id -> Int4,
        #[sql_name = "ProductID"]
        product_id -> Int4,
        #[sql_name = "Quantity"]
        quantity -> Int4,
    }
}

diesel::joinable!(products -> product_types (product_type_id));
diesel::joinable!(table_orders -> mesas (mesa_id));
diesel::joinable!(order_products -> table_orders (order_id));
diesel::joinable!(order_products -> products (product_id));

diesel::allow_tables_to_appear_in_same_query!(
    mesas,
    order_products,
    product_types,
    products,
    table_orders,
);
