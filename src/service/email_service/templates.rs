pub struct VerificationEmailContent {
    pub subject: String,
    pub text: String,
    pub html: String,
}

impl VerificationEmailContent {
    pub fn new(platform_name: &str, code: &str, ttl_minutes: i64) -> Self {
        Self {
            subject: format!("Your verification code - {}", platform_name),
            text: Self::text_template(platform_name, code, ttl_minutes),
            html: Self::html_template(platform_name, code, ttl_minutes),
        }
    }

    fn text_template(platform_name: &str, code: &str, ttl_minutes: i64) -> String {
        format!(
            r#"Hi!

Your {platform} verification code is: {code}

This code is valid for {ttl} minutes.

Important: never share this code with anyone. If you did not request it, ignore this message.

--
Thanks for using {platform}
This is an automated message, please do not reply."#,
            platform = platform_name,
            code = code,
            ttl = ttl_minutes,
        )
    }

    fn html_template(platform_name: &str, code: &str, ttl_minutes: i64) -> String {
        format!(
            r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <style>
        body {{ font-family: system-ui, -apple-system, sans-serif; font-size: 16px; color: #333; margin: 0; padding: 20px; background: #f9f9f9; }}
        .card {{ max-width: 600px; margin: 0 auto; background: #ffffff; border-radius: 12px; padding: 40px; box-shadow: 0 2px 8px rgba(0,0,0,0.1); }}
        h1 {{ color: #FF6B35; font-size: 32px; text-align: center; margin: 0; }}
        .tagline {{ color: #666; font-size: 14px; text-align: center; margin-top: 5px; }}
        .divider {{ border-top: 2px solid #FF6B35; margin: 30px 0; }}
        .code {{ background: #FFF5F2; border: 2px solid #FF6B35; border-radius: 8px; padding: 20px; margin: 25px 0; text-align: center; font-size: 36px; font-weight: bold; color: #FF6B35; letter-spacing: 8px; }}
        .warning {{ background: #FFF8E1; border-left: 4px solid #FFC107; padding: 15px; border-radius: 4px; font-size: 13px; color: #666; }}
        .footer {{ font-size: 12px; color: #999; text-align: center; margin-top: 30px; border-top: 1px solid #eaeaea; padding-top: 20px; }}
    </style>
</head>
<body>
    <div class="card">
        <h1>{platform}</h1>
        <p class="tagline">Find your perfect spot</p>
        <div class="divider"></div>
        <p>Hi!</p>
        <p>Your verification code for <strong>{platform}</strong> is:</p>
        <div class="code">{code}</div>
        <p>This code is valid for <strong>{ttl} minutes</strong>.</p>
        <div class="warning"><strong>Important:</strong> never share this code with anyone. If you did not request it, ignore this message.</div>
        <div class="footer">
            <p>Thanks for using {platform}</p>
            <p>This is an automated message, please do not reply.</p>
        </div>
    </div>
</body>
</html>"#,
            platform = platform_name,
            code = code,
            ttl = ttl_minutes,
        )
    }
}
