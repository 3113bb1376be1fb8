mod activity;
mod admin;
mod class;
mod member;
mod soft_delete;
mod subscription;
mod trainer;
