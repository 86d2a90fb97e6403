pub mod field_value;
pub mod patch_operation;
pub mod rejection;
pub mod status_notice;
pub mod update_request;
pub mod validated_update;
pub mod work_item_id;
pub mod work_item_state;
pub mod work_item_type;
