mod rejection;
mod validated_update;
mod work_item_id;
mod work_item_state;
mod work_item_type;
