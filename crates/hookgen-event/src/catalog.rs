/// Stripe 事件类型目录
///
/// 每个条目的形式为 `<resource>.<action>` 或 `<resource>.<subresource>.<action>`，
/// 首段 resource 决定对象 ID 前缀（见 [`object_id_prefix`]）。
pub const EVENT_TYPES: &[&str] = &[
    "payment_intent.succeeded",
    "payment_intent.payment_failed",
    "payment_intent.created",
    "payment_intent.canceled",
    "charge.succeeded",
    "charge.failed",
    "charge.refunded",
    "charge.dispute.created",
    "charge.dispute.closed",
    "invoice.created",
    "invoice.finalized",
    "invoice.paid",
    "invoice.payment_failed",
    "invoice.payment_action_required",
    "invoice.upcoming",
    "invoice.voided",
    "customer.created",
    "customer.updated",
    "customer.deleted",
    "customer.subscription.created",
    "customer.subscription.updated",
    "customer.subscription.deleted",
    "customer.subscription.paused",
    "customer.subscription.resumed",
    "checkout.session.completed",
    "checkout.session.expired",
    "payment_method.attached",
    "payment_method.detached",
    "payout.paid",
    "payout.failed",
];

/// 货币代码
pub const CURRENCIES: &[&str] = &["usd", "brl", "eur"];

/// 对象状态
pub const OBJECT_STATUSES: &[&str] = &["succeeded", "pending", "failed"];

/// 商品描述词表（形容词 + 材质 + 品名）
pub const PRODUCT_ADJECTIVES: &[&str] = &[
    "Small",
    "Ergonomic",
    "Rustic",
    "Intelligent",
    "Gorgeous",
    "Incredible",
    "Fantastic",
    "Practical",
    "Sleek",
    "Awesome",
    "Generic",
    "Handcrafted",
    "Handmade",
    "Licensed",
    "Refined",
    "Unbranded",
    "Elegant",
];

pub const PRODUCT_MATERIALS: &[&str] = &[
    "Steel", "Wooden", "Concrete", "Plastic", "Cotton", "Granite", "Rubber", "Metal", "Soft",
    "Fresh", "Frozen",
];

pub const PRODUCT_NAMES: &[&str] = &[
    "Chair", "Car", "Computer", "Keyboard", "Mouse", "Bike", "Ball", "Gloves", "Pants", "Shirt",
    "Table", "Shoes", "Hat", "Towels", "Soap", "Tuna", "Chicken", "Fish", "Cheese", "Bacon",
    "Pizza", "Salad", "Sausages", "Chips",
];

/// 取事件类型的 resource 段（首个 `.` 之前的子串）
pub fn resource_of(event_type: &str) -> &str {
    event_type.split('.').next().unwrap_or(event_type)
}

/// resource 名称到对象 ID 前缀的映射，未收录的 resource 使用自身作为前缀
pub fn object_id_prefix(resource: &str) -> &str {
    match resource {
        "customer" => "cus",
        "payment_intent" => "pi",
        "charge" => "ch",
        "invoice" => "in",
        "checkout" => "cs",
        "payment_method" => "pm",
        "payout" => "po",
        other => other,
    }
}
