pub mod otp_controller;
