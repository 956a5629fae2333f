//! User-facing notices shown on the site.
//!
//! The site is Arabic-only; every message a visitor or administrator can see
//! is defined here so the wording stays consistent across handlers.

/// Name contains something other than Arabic or Latin letters.
pub const INVALID_NAME: &str = "الاسم يجب أن يحتوي على أحرف فقط (عربية أو إنجليزية)";

/// Phone contains something other than digits, spaces, hyphens and a leading `+`.
pub const INVALID_PHONE: &str = "رقم الهاتف يجب أن يحتوي على أرقام فقط";

/// Blood type is not one of the eight offered options.
pub const INVALID_BLOOD_TYPE: &str = "فصيلة الدم غير صالحة";

/// Another donor already registered this phone number.
pub const DUPLICATE_PHONE: &str = "رقم الهاتف مسجل مسبقاً";

/// Donation form accepted.
pub const DONATION_RECORDED: &str = "شكراً لك على التبرع! تم تسجيل معلوماتك بنجاح";

/// Admin signed in.
pub const LOGIN_SUCCESS: &str = "تم تسجيل الدخول بنجاح!";

/// Wrong username or password.
pub const INVALID_CREDENTIALS: &str = "اسم المستخدم أو كلمة المرور غير صحيحة";

/// Admin page requested without a session.
pub const LOGIN_REQUIRED: &str = "يجب تسجيل الدخول أولاً";

/// Donor removed from the registry.
pub const DONOR_DELETED: &str = "تم حذف المتبرع بنجاح";

/// Delete requested for an id that does not exist.
pub const DONOR_NOT_FOUND: &str = "المتبرع غير موجود";

/// Admin signed out.
pub const LOGGED_OUT: &str = "تم تسجيل الخروج بنجاح";

/// Too many login attempts from one address.
pub const TOO_MANY_ATTEMPTS: &str = "محاولات كثيرة جداً، يرجى المحاولة لاحقاً";

/// Generic failure shown instead of internal error details.
pub const INTERNAL_ERROR: &str = "حدث خطأ غير متوقع، يرجى المحاولة لاحقاً";
