//! JNI entry points for the `HelloJNI` class (default package). The JVM
//! binds these by their mangled names once `System.loadLibrary("hello")`
//! has run, so the names must not change.

use crate::CALL_BANNER;
use jni::errors::Error;
use jni::objects::JObject;
use jni::sys::{jdouble, jint, JNI_VERSION_1_6};
use jni::{JNIEnv, JavaVM};
use std::ffi::c_void;

/// Run by the JVM when `System.loadLibrary("hello")` loads the module.
/// Sets up the module's logging and asks for JNI 1.6.
#[no_mangle]
pub extern "system" fn JNI_OnLoad(_vm: JavaVM, _reserved: *mut c_void) -> jint {
    crate::init_logging();
    tracing::debug!("hello loaded into a JVM");
    JNI_VERSION_1_6
}

/// `private native void sayHello();`
#[no_mangle]
pub extern "system" fn Java_HelloJNI_sayHello(_env: JNIEnv, _this: JObject) {
    crate::say_hello();
}

/// `private native double average(int a, int b);`
#[no_mangle]
pub extern "system" fn Java_HelloJNI_average(
    _env: JNIEnv,
    _this: JObject,
    a: jint,
    b: jint,
) -> jdouble {
    crate::average(a, b)
}

/// `private native void callFromRust();`
///
/// Calls `showFromJava()` on the same object that made this call. An
/// exception thrown there reaches the caller unchanged; any other failure
/// is raised as `IllegalStateException`.
#[no_mangle]
pub extern "system" fn Java_HelloJNI_callFromRust(mut env: JNIEnv, this: JObject) {
    println!("{CALL_BANNER}");
    match show_from_java(&mut env, &this) {
        Ok(()) => {}
        // Already pending; the JVM throws it once we return.
        Err(Error::JavaException) => {}
        Err(e) => {
            tracing::error!("callFromRust failed: {e}");
            if env.exception_check().unwrap_or(false) {
                return;
            }
            if let Err(e) = env.throw_new("java/lang/IllegalStateException", e.to_string()) {
                tracing::error!("Could not raise exception: {e}");
            }
        }
    }
}

fn show_from_java(env: &mut JNIEnv, this: &JObject) -> jni::errors::Result<()> {
    let version = env.get_version()?;
    println!("API Version: {}", jint::from(version));
    env.call_method(this, "showFromJava", "()V", &[])?;
    Ok(())
}
