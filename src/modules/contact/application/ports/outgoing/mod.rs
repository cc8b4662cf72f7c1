pub mod contact_notifier;
