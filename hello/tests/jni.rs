//! Runs the JNI entry points inside a real JVM. A small `HelloJNI` class is
//! compiled with `javac`, and the natives are registered against it by hand
//! (the test binary links the module statically, so the JVM can't find them
//! by name). Without a JDK the tests skip quietly.

use hello::jni_exports::{Java_HelloJNI_average, Java_HelloJNI_callFromRust, Java_HelloJNI_sayHello};
use jni::objects::{JObject, JValue};
use jni::{AttachGuard, InitArgsBuilder, JNIEnv, JNIVersion, JavaVM, NativeMethod};
use std::ffi::c_void;
use std::path::PathBuf;
use std::process::Command;
use std::sync::OnceLock;

const HELLO_JNI: &str = r#"
public class HelloJNI {
    private native void sayHello();
    private native double average(int a, int b);
    private native void callFromRust();

    int shown;
    boolean fail;

    void showFromJava() {
        shown++;
        if (fail) {
            throw new IllegalArgumentException("refused");
        }
    }
}
"#;

// Declares the native but has no showFromJava to call back into.
const ORPHAN: &str = r#"
public class Orphan {
    private native void callFromRust();
}
"#;

fn javac() -> PathBuf {
    match std::env::var_os("JAVA_HOME") {
        Some(home) => PathBuf::from(home).join("bin").join("javac"),
        None => PathBuf::from("javac"),
    }
}

fn compile_classes() -> Option<PathBuf> {
    let dir = std::env::temp_dir().join(format!("hello-jni-{}", std::process::id()));
    std::fs::create_dir_all(&dir).ok()?;
    let sources = [("HelloJNI.java", HELLO_JNI), ("Orphan.java", ORPHAN)];
    for (name, source) in sources {
        std::fs::write(dir.join(name), source).ok()?;
    }
    let status = Command::new(javac())
        .arg("-d")
        .arg(&dir)
        .args(sources.iter().map(|(name, _)| dir.join(name)))
        .status()
        .ok()?;
    status.success().then_some(dir)
}

fn natives(names: &[&str]) -> Vec<NativeMethod> {
    let all = [
        ("sayHello", "()V", Java_HelloJNI_sayHello as *mut c_void),
        ("average", "(II)D", Java_HelloJNI_average as *mut c_void),
        ("callFromRust", "()V", Java_HelloJNI_callFromRust as *mut c_void),
    ];
    all.into_iter()
        .filter(|(name, _, _)| names.contains(name))
        .map(|(name, sig, fn_ptr)| NativeMethod {
            name: name.into(),
            sig: sig.into(),
            fn_ptr,
        })
        .collect()
}

fn start_jvm() -> Option<JavaVM> {
    let classes = compile_classes()?;
    let class_path = format!("-Djava.class.path={}", classes.display());
    let args = InitArgsBuilder::new()
        .version(JNIVersion::V8)
        .option(&class_path)
        .build()
        .ok()?;
    let vm = match JavaVM::new(args) {
        Ok(vm) => vm,
        Err(e) => {
            eprintln!("skipping, could not start a JVM: {e}");
            return None;
        }
    };
    {
        let mut env = vm.attach_current_thread().ok()?;
        env.register_native_methods("HelloJNI", &natives(&["sayHello", "average", "callFromRust"]))
            .ok()?;
        env.register_native_methods("Orphan", &natives(&["callFromRust"]))
            .ok()?;
    }
    Some(vm)
}

/// One JVM per process; tests attach their own thread to it.
fn attach() -> Option<AttachGuard<'static>> {
    static JVM: OnceLock<Option<JavaVM>> = OnceLock::new();
    let vm = JVM.get_or_init(start_jvm).as_ref()?;
    vm.attach_current_thread().ok()
}

fn new_hello<'local>(env: &mut JNIEnv<'local>) -> JObject<'local> {
    env.new_object("HelloJNI", "()V", &[]).unwrap()
}

fn shown(env: &mut JNIEnv, obj: &JObject) -> i32 {
    env.get_field(obj, "shown", "I").unwrap().i().unwrap()
}

#[test]
fn average_through_the_jvm() {
    let Some(mut env) = attach() else {
        return;
    };
    let obj = new_hello(&mut env);
    let avg = env
        .call_method(&obj, "average", "(II)D", &[JValue::Int(5), JValue::Int(10)])
        .unwrap()
        .d()
        .unwrap();
    assert_eq!(avg, 7.5);
}

#[test]
fn say_hello_through_the_jvm() {
    let Some(mut env) = attach() else {
        return;
    };
    let obj = new_hello(&mut env);
    env.call_method(&obj, "sayHello", "()V", &[]).unwrap();
    env.call_method(&obj, "sayHello", "()V", &[]).unwrap();
    assert!(!env.exception_check().unwrap());
}

#[test]
fn call_back_reaches_the_calling_object() {
    let Some(mut env) = attach() else {
        return;
    };
    let x = new_hello(&mut env);
    let y = new_hello(&mut env);

    env.call_method(&x, "callFromRust", "()V", &[]).unwrap();
    env.call_method(&x, "callFromRust", "()V", &[]).unwrap();
    env.call_method(&y, "callFromRust", "()V", &[]).unwrap();

    assert_eq!(shown(&mut env, &x), 2);
    assert_eq!(shown(&mut env, &y), 1);
}

#[test]
fn exception_from_the_call_back_reaches_the_caller() {
    let Some(mut env) = attach() else {
        return;
    };
    let obj = new_hello(&mut env);
    env.set_field(&obj, "fail", "Z", JValue::Bool(1)).unwrap();

    let result = env.call_method(&obj, "callFromRust", "()V", &[]);
    assert!(matches!(result, Err(jni::errors::Error::JavaException)));

    let thrown = env.exception_occurred().unwrap();
    env.exception_clear().unwrap();
    assert!(env
        .is_instance_of(&*thrown, "java/lang/IllegalArgumentException")
        .unwrap());
    assert_eq!(shown(&mut env, &obj), 1);
}

#[test]
fn missing_call_back_method_raises_in_the_caller() {
    let Some(mut env) = attach() else {
        return;
    };
    let orphan = env.new_object("Orphan", "()V", &[]).unwrap();

    let result = env.call_method(&orphan, "callFromRust", "()V", &[]);
    assert!(matches!(result, Err(jni::errors::Error::JavaException)));

    let thrown = env.exception_occurred().unwrap();
    env.exception_clear().unwrap();
    let no_such_method = env
        .is_instance_of(&*thrown, "java/lang/NoSuchMethodError")
        .unwrap();
    let illegal_state = env
        .is_instance_of(&*thrown, "java/lang/IllegalStateException")
        .unwrap();
    assert!(no_such_method || illegal_state);
}
