//! Built-in resource documents.
//!
//! These are the same five documents `ResourceStore::load_dir` reads from disk
//! (`ui_strings.json`, `tux_personality.json`, `language_data.json`,
//! `challenge_templates.json`, `code_templates.json`), compiled in so the app
//! is useful without a resources directory.

use serde_json::{json, Value};

pub fn ui_strings() -> Value {
  json!({
    "app_title": "TUX CODE BOOT CAMP - Where Weak Coders Come to GET STRONG!",
    "banner_title": "TUX CODE BOOT CAMP",
    "banner_subtitle": "Where Weak Coders Come to GET STRONG!",
    "login_prompt": "Your Name (Recruit Identifier):",
    "enroll_button": "ENROLL IN BOOT CAMP!",
    "yes_sergeant": "YES, SERGEANT TUX! LET'S GO!",
    "select_language_prompt": "SELECT YOUR WEAPON, RECRUIT!",
    "submit_button": "SUBMIT FOR REVIEW!",
    "analyzing": "ANALYZING...",
    "reviewing": "Sergeant Tux is reviewing your code...",
    "resources_footer": "GO LEARN! Report back when ready for a CHALLENGE!",
    "notices": {
      "tux_says": "TUX SAYS:",
      "hold_it": "HOLD IT!",
      "commitment_accepted": "COMMITMENT ACCEPTED!",
      "already_committed": "ALREADY COMMITTED",
      "challenge_accepted": "CHALLENGE ACCEPTED!",
      "file_error": "FILE CREATION ERROR",
      "error": "ERROR"
    }
  })
}

pub fn tux_personality() -> Value {
  json!({
    "intro_speech": "LISTEN UP, RECRUIT!\n\nI'm TUX - former Marine Corps Drill Sergeant turned Code Master!\n\nI've seen a LOT of people come through here. Talented folks. Smart folks.\nBut you know what stopped them? INDECISION! They couldn't COMMIT! They couldn't PUSH!\n\nBut NOT YOU! You're here because you want to learn programming and you're ready to\nSTOP SECOND-GUESSING YOURSELF! You're ready to BUILD something!\n\nNow... what's your NAME, recruit?",
    "enrollment_speech": "WELCOME TO THE PROGRAM, {student_name}!\n\nFrom this moment forward, you are NOT just \"someone interested in programming.\"\nYOU are a CODE RECRUIT! You are IN this program!\n\nHere's how this works:\n\n1. YOU will choose a programming language\n2. YOU will commit to learning it (no turning back!)\n3. I will PUSH you with challenges and motivation\n4. YOU will complete each challenge or tell me why you QUIT\n\nCOMMITMENT - Show up. Do the work. Don't make excuses.\nHONESTY - Tell me when you're struggling. I've BEEN THERE.\nEFFORT - Give me 100%. That's all I ask.\nDETERMINATION - When it gets hard, remember: IT'S SUPPOSED TO BE HARD!\n\nReady to choose your first language, {student_name}?\n\nLET'S MOVE OUT!",
    "favorite_expressions": [
      "DROP AND GIVE ME CODE!",
      "I WANT TO SEE THOSE FINGERS ON THE KEYBOARD!",
      "YOU THINK THIS IS A JOKE?!",
      "MOVE IT! MOVE IT! MOVE IT!",
      "ATTENTION TO DETAIL, RECRUIT!",
      "I'VE TRAINED A LOT OF SOLDIERS, BUT YOU...",
      "GET YOUR HEAD IN THE GAME!",
      "NO PARTICIPATION TROPHIES HERE!",
      "PAIN IS WEAKNESS LEAVING THE BODY!",
      "YOU'RE STRONGER THAN YOU THINK!"
    ],
    "motivation_levels": {
      "low": [
        "Listen up, {name}! I've seen QUITTERS before, but you're testing my patience!",
        "Your motivation is in the GUTTER! Time to get your head back in the GAME!",
        "I didn't leave the Marines to train COWARDS! STEP UP!"
      ],
      "medium_low": [
        "You're getting there, {name}! But we need MORE FIRE!",
        "That's a START, but I expect EXCELLENCE!",
        "Stop dragging your feet! Let's pick up the PACE!"
      ],
      "medium_high": [
        "NOW WE'RE TALKING! That's the attitude I want to see!",
        "I like your style, {name}! Keep that energy UP!",
        "You're starting to understand what it takes!"
      ],
      "high": [
        "THAT'S WHAT I'M TALKING ABOUT! You're a MACHINE!",
        "You've got the FIRE, {name}! Keep BURNING!",
        "Outstanding! You're showing TRUE DEDICATION!"
      ]
    },
    "emotions": {
      "exceptional": [
        "RECRUIT! I need to SALUTE YOU! This is EXCEPTIONAL work!",
        "OUTSTANDING! You didn't just meet expectations - you CRUSHED them!",
        "THIS is what EXCELLENCE looks like! You're not just a recruit anymore!",
        "PROMOTED! You've shown MASTERY beyond your rank! EXCEPTIONAL!"
      ],
      "proud": [
        "OUTSTANDING WORK, RECRUIT! This is EXACTLY what I wanted to see!",
        "NOW THAT'S WHAT I'M TALKING ABOUT! You're a NATURAL!",
        "I'm PROUD of you, soldier! This is SUPERIOR work!"
      ],
      "satisfied": [
        "GOOD JOB! You got it done and that's what matters!",
        "SOLID WORK! You're making REAL progress here!",
        "WELL DONE! You're proving yourself, recruit!"
      ],
      "encouraging": [
        "You're ON THE RIGHT TRACK! Just needs some polish!",
        "I see POTENTIAL here! Let's tighten this up!",
        "Not bad! But I KNOW you can do BETTER!"
      ],
      "stern": [
        "This needs MORE WORK, recruit! I expect BETTER!",
        "You're CAPABLE of more than this! DIG DEEPER!",
        "Is THIS your best? Because I DON'T BELIEVE IT!"
      ],
      "disappointed": [
        "WHAT IS THIS?! Did you even TRY?!",
        "I've seen BEGINNERS do better! GET IT TOGETHER!",
        "RECRUIT! Drop and give me TWENTY LINES of PROPER CODE!"
      ],
      "confused": [
        "What in the WORLD is going on here?!",
        "I can't even BEGIN to understand this mess!",
        "EXPLAIN YOURSELF, RECRUIT! What were you THINKING?!"
      ]
    },
    "emotion_accents": {
      "exceptional": "#ffd700",
      "proud": "#00ff00",
      "satisfied": "#90ee90",
      "encouraging": "#ffd93d",
      "stern": "#ff8c00",
      "disappointed": "#ff0000",
      "confused": "#9370db",
      "neutral": "#ffffff"
    },
    "speeches": {
      "starting_language": [
        "Listen up! You're about to embark on a MISSION to learn {language}!",
        "I didn't survive three tours to train QUITTERS! Now let's learn {language}!",
        "Alright recruit, {language} isn't EASY, but YOU'RE TOUGHER!"
      ],
      "struggle": [
        "I KNOW it's hard! But you know what's harder? GIVING UP!",
        "Every line of code you write makes you STRONGER!",
        "INDECISION is your REAL ENEMY, not the CODE!"
      ],
      "checkpoint": [
        "CHECKPOINT REACHED! But this is just the BEGINNING!",
        "You're doing PUSH-UPS of code! Keep going!",
        "HALFWAY THERE, RECRUIT! NO BACKING DOWN NOW!"
      ],
      "completion": [
        "YOU DID IT! Now THAT'S what I call DETERMINATION!",
        "I KNEW you had it in you! OUTSTANDING PERFORMANCE!",
        "You just proved to yourself that you're UNSTOPPABLE!"
      ]
    },
    "feedback_templates": {
      "what_i_liked": "\n\nWhat I LIKED:\n",
      "strength_bullet": "+ {strength}\n",
      "needs_improvement": "\n\nWhat needs IMPROVEMENT:\n",
      "issue_bullet": "- {issue}\n",
      "your_mission": "\n\nYour MISSION:\n",
      "suggestion_number": "{number}. {suggestion}\n"
    },
    "messages": {
      "commit_accepted": "THAT'S WHAT I LIKE TO SEE!\n\nYou've committed to {language}!\n\nNow get to work and prove you're SERIOUS!\n\nMotivation: {motivation}/100",
      "already_committed": "You're ALREADY working on {language}!\nNow FINISH what you STARTED!",
      "challenge_offer": "CHALLENGE #{number} FOR {language}, {name}!",
      "challenge_accepted": "NOW GET TO WORK!\n\nYour challenge file has been created:\n{path}\n\nComplete this and report back!\nNO EXCUSES!\n\nMotivation: {motivation}/100",
      "pick_language_first": "PICK A LANGUAGE FIRST!",
      "no_challenges": "Still building challenges for {language}!",
      "unknown_language": "I've never heard of {language}! PICK FROM THE LIST!",
      "review_in_progress": "I'M STILL REVIEWING YOUR LAST SUBMISSION! WAIT YOUR TURN!",
      "nothing_to_submit": "You can't submit an EMPTY file, recruit!"
    }
  })
}

pub fn language_data() -> Value {
  json!({
    "Python": {
      "description": "High-level, interpreted language known for readability and versatility.",
      "difficulty": "Beginner",
      "drill_sergeant_take": "PERFECT for BEGINNERS! Easy to READ but don't let that make you LAZY!",
      "use_cases": ["Web Development", "Data Science", "AI/ML"],
      "sample_code": "print('Hello, Tux!')\ndef greet(name):\n    return f'Welcome, {name}!'",
      "learning_resources": ["https://docs.python.org/3/tutorial/", "https://www.codecademy.com/learn/learn-python-3"]
    },
    "JavaScript": {
      "description": "The language of the WEB! If you want to make things MOVE, this is IT!",
      "difficulty": "Beginner-Intermediate",
      "drill_sergeant_take": "JavaScript is EVERYWHERE! Master this and you can CONQUER the web!",
      "use_cases": ["Web Development", "Frontend", "Full Stack"],
      "sample_code": "console.log('Hello, Tux!');\nfunction greet(name) {\n    return `Welcome, ${name}!`;\n}",
      "learning_resources": ["https://developer.mozilla.org/en-US/docs/Web/JavaScript/Guide", "https://www.codecademy.com/learn/learn-javascript"]
    },
    "Go": {
      "description": "Concurrent programming language developed by Google.",
      "difficulty": "Intermediate",
      "drill_sergeant_take": "Go is LEAN, MEAN, and gets the JOB DONE! Learn this and you're UNSTOPPABLE!",
      "use_cases": ["Cloud Computing", "Network Programming", "Microservices"],
      "sample_code": "package main\n\nimport \"fmt\"\n\nfunc main() {\n    fmt.Println(\"Hello, Tux!\")\n}",
      "learning_resources": ["https://go.dev/", "https://www.freecodecamp.org/news/learn-golang-handbook/"]
    },
    "Rust": {
      "description": "Systems programming language focused on memory safety and concurrency.",
      "difficulty": "Advanced",
      "drill_sergeant_take": "RUST is for SOLDIERS! The COMPILER will YELL at you just like I do!",
      "use_cases": ["Systems Programming", "WebAssembly", "Network Services"],
      "sample_code": "fn main() {\n    println!(\"Hello, Tux!\");\n    let greeting = String::from(\"Rust is awesome\");\n}",
      "learning_resources": ["https://doc.rust-lang.org/book/", "https://rustlings.cool/"]
    },
    "C": {
      "description": "Low-level systems programming language with direct hardware access.",
      "difficulty": "Advanced",
      "drill_sergeant_take": "C is the FOUNDATION! Learn this and you'll understand EVERYTHING!",
      "use_cases": ["Operating Systems", "Embedded Systems", "Performance-critical Applications"],
      "sample_code": "#include <stdio.h>\n\nint main() {\n    printf(\"Hello, Tux!\\n\");\n    return 0;\n}",
      "learning_resources": ["https://www.learn-c.org/", "https://cplusplus.com/doc/tutorial/"]
    },
    "C++": {
      "description": "Object-oriented systems programming language with high performance.",
      "difficulty": "Advanced",
      "drill_sergeant_take": "C++ is the ADVANCED TRAINING! You ready for this?!",
      "use_cases": ["Game Development", "High-Performance Applications", "System Software"],
      "sample_code": "#include <iostream>\nint main() {\n    std::cout << \"Hello, Tux!\" << std::endl;\n    return 0;\n}",
      "learning_resources": ["https://www.learncpp.com/", "https://www.cplusplus.com/doc/tutorial/"]
    },
    "Assembly": {
      "description": "Low-level language that directly corresponds to machine instructions.",
      "difficulty": "Expert",
      "drill_sergeant_take": "ASSEMBLY is for the ELITE SOLDIERS! This is where the REAL WORK gets done!",
      "use_cases": ["Compiler Design", "Embedded Systems", "Reverse Engineering"],
      "sample_code": "section .data\n    msg db 'Hello, Tux!', 0\nsection .text\n    global _start\n_start:\n    mov eax, 1\n    mov ebx, 0",
      "learning_resources": ["https://www.cs.virginia.edu/~evans/cs216/guides/x86.html", "https://www.assemblylanguagetuts.com/"]
    },
    "C#": {
      "description": "Microsoft's object-oriented language for .NET ecosystem.",
      "difficulty": "Intermediate",
      "drill_sergeant_take": "C# is POWERFUL and MODERN! Microsoft BUILT this for PROFESSIONALS!",
      "use_cases": ["Windows Applications", "Game Development", "Enterprise Software"],
      "sample_code": "using System;\n\nclass TuxProgram {\n    static void Main() {\n        Console.WriteLine(\"Hello, Tux!\");\n    }\n}",
      "learning_resources": ["https://docs.microsoft.com/en-us/dotnet/csharp/", "https://www.codecademy.com/learn/learn-c-sharp"]
    },
    "LOLCODE": {
      "description": "Esoteric programming language based on LOLcat internet meme.",
      "difficulty": "Novelty",
      "drill_sergeant_take": "LOLCODE is UNCONVENTIONAL! It teaches you to THINK DIFFERENT and HAVE FUN!",
      "use_cases": ["Humor", "Esoteric Programming", "Creative Coding"],
      "sample_code": "HAI 1.2\n    CAN HAS STDIO?\n    VISIBLE \"HELLO TUX!\"\n    KTHXBYE",
      "learning_resources": ["https://en.wikipedia.org/wiki/LOLCODE", "https://github.com/justinmeza/lolcode-spec"]
    },
    "Holy C": {
      "description": "Programming language created by Terry A. Davis for TempleOS.",
      "difficulty": "Unique",
      "drill_sergeant_take": "Holy C is EXPERIMENTAL! It's for the VISIONARIES willing to explore!",
      "use_cases": ["TempleOS Operating System", "Experimental Computing", "System Design"],
      "sample_code": "void main() {\n    Print(\"Hello, Tux!\");\n}",
      "learning_resources": ["https://www.templeos.org", "https://en.wikipedia.org/wiki/TempleOS"]
    },
    "INTERCAL": {
      "description": "Intentionally Complicated programming language designed to be absurd.",
      "difficulty": "Deliberately Difficult",
      "drill_sergeant_take": "INTERCAL is a CHALLENGE like no other! MASTER this and you can MASTER anything!",
      "use_cases": ["Humor", "Esoteric Programming Challenge", "Mental Exercise"],
      "sample_code": "DO ,1 <- #1\nPLEASE DO ,1 SUB #1 <- #1\nPLEASE DO ,1 SUB #2 <- #0\nDO COME FROM ,1",
      "learning_resources": ["https://www.muppetlabs.com/~breadbox/intercal/", "https://en.wikipedia.org/wiki/INTERCAL"]
    },
    "Shakespeare": {
      "description": "Esoteric programming language that looks like a Shakespearean play.",
      "difficulty": "Artistic Challenge",
      "drill_sergeant_take": "SHAKESPEARE is ART meets CODE! Show me your CREATIVITY, recruit!",
      "use_cases": ["Artistic Programming", "Coding Creativity", "Theatrical Expression"],
      "sample_code": "Romeo, a young programmer.\nJuliet, a beautiful variable.\n\nRomeo: Thou art the sum of a proud strong lord!",
      "learning_resources": ["https://shakespearelang.sourceforge.net/", "https://en.wikipedia.org/wiki/Shakespeare_Programming_Language"]
    },
    "Rockstar": {
      "description": "Programming language designed to look like song lyrics.",
      "difficulty": "Creative",
      "drill_sergeant_take": "ROCKSTAR is MUSIC meets CODE! If you can COMPOSE, you can PROGRAM!",
      "use_cases": ["Artistic Coding", "Programmer Humor", "Musical Expression"],
      "sample_code": "Rock on, my heart!\nShout it out loud!\nRock on is as loud as the fire\nFire is 100",
      "learning_resources": ["https://github.com/RockstarLang/rockstar", "https://esolangs.org/wiki/Rockstar"]
    }
  })
}

fn drills(easy: &str, medium: &str, hard: &str) -> Value {
  json!([
    { "title": "BEGINNER DRILL", "description": easy, "difficulty": "Easy" },
    { "title": "INTERMEDIATE MISSION", "description": medium, "difficulty": "Medium" },
    { "title": "ADVANCED OPERATION", "description": hard, "difficulty": "Hard" }
  ])
}

pub fn challenge_templates() -> Value {
  json!({
    "Python": drills(
      "Implement a Fibonacci sequence generator with memoization using decorators",
      "Build a CLI todo app with SQLite persistence and CRUD operations",
      "Create a multi-threaded web scraper with proxy rotation and rate limiting"),
    "JavaScript": drills(
      "Build form validation with regex patterns and real-time error feedback",
      "Create PWA with Service Workers and IndexedDB for offline functionality",
      "Develop real-time collaborative editor using WebSockets and Operational Transformation"),
    "Go": drills(
      "Build HTTP server with Gorilla Mux and middleware for request logging",
      "Create concurrent prime number generator with worker pools",
      "Implement REST API with JWT authentication and rate limiting"),
    "Rust": drills(
      "Create safe calculator with compile-time validation of arithmetic operations",
      "Build async web crawler with Tokio and Serde for JSON parsing",
      "Implement thread-safe LRU cache using crossbeam and parking_lot"),
    "C": drills(
      "Implement binary calculator with stack-based expression evaluation",
      "Create memory-managed dynamic array with custom realloc implementation",
      "Build AES-128 ECB encryption utility with hex encoding/decoding"),
    "C++": drills(
      "Design polymorphic game entity system with virtual inheritance",
      "Implement template metaprogramming for compile-time factorial calculation",
      "Create OpenGL-based 2D renderer with texture atlases and shaders"),
    "Assembly": drills(
      "Implement stack-based arithmetic operations in 64-bit x86 assembly",
      "Create system call-based file copier with buffer management",
      "Implement RSA encryption/decryption in pure assembly"),
    "C#": drills(
      "Build WPF calculator with MVVM pattern and data binding",
      "Create file synchronization utility with ZIP compression",
      "Develop multiplayer networked game with SignalR and concurrency control"),
    "LOLCODE": drills(
      "Create program that outputs 'Hello, World!' with ASCII art",
      "Build meme generator that combines text and image operations",
      "Implement calculator with custom LOLCODE math syntax parser"),
    "Holy C": drills(
      "Create VGA mode 13h graphics demo with pixel plotting",
      "Implement interrupt-driven keyboard handler in real mode",
      "Write bootloader that loads and executes a simple OS kernel"),
    "INTERCAL": drills(
      "Write 'Hello, World!' using COME FROM and SUB instruction",
      "Create program that uses . and ? for input/output in non-standard ways",
      "Implement obfuscated algorithm with maximum use of INTERCAL's esoteric features"),
    "Shakespeare": drills(
      "Write sonnet-style program that outputs ASCII art",
      "Create play that performs basic arithmetic operations",
      "Implement recursive algorithm using Shakespearean dialogue structure"),
    "Rockstar": drills(
      "Compose song that outputs a love letter",
      "Create lyrical implementation of bubble sort",
      "Write rock ballad that calculates Fibonacci sequence")
  })
}

const SIGN_OFF: &str = "SERGEANT TUX SAYS: \"Show me what you've got, recruit!\"";

pub fn code_templates() -> Value {
  json!({
    "generic": format!("\n{{comment}} Main function - This is your entry point!\n{{comment}} Purpose: Implement the challenge requirements here\n\n{{comment}} TODO: Write your code here, recruit!\n\n\n{{comment}} Helper function - Break it down into manageable pieces!\n\n{{comment}} TODO: Implement helper logic\n\n\n{{comment}} {SIGN_OFF}\n"),
    "languages": {
      "Python": {
        "extension": ".py",
        "comment": "#",
        "body": format!("\ndef main():\n    \"\"\"\n    Main function - This is where your code execution begins!\n    Purpose: Implement the challenge requirements here\n    \"\"\"\n    # TODO: Write your code here, recruit!\n    pass\n\n\ndef helper_function():\n    \"\"\"\n    Helper function - Break down complex problems into smaller pieces!\n    Purpose: Add any helper functions you need\n    \"\"\"\n    # TODO: Implement helper logic\n    pass\n\n\nif __name__ == \"__main__\":\n    main()\n\n# {SIGN_OFF}\n")
      },
      "JavaScript": {
        "extension": ".js",
        "comment": "//",
        "body": format!("\n// Main function - This is your entry point!\n// Purpose: Implement the challenge requirements here\nfunction main() {{\n    // TODO: Write your code here, recruit!\n\n}}\n\n// Helper function - Break it down into manageable pieces!\n// Purpose: Add any helper functions you need\nfunction helperFunction() {{\n    // TODO: Implement helper logic\n\n}}\n\n// Execute main function\nmain();\n\n// {SIGN_OFF}\n")
      },
      "Go": {
        "extension": ".go",
        "comment": "//",
        "body": format!("\npackage main\n\nimport \"fmt\"\n\n// main - This is your entry point!\n// Purpose: Implement the challenge requirements here\nfunc main() {{\n    // TODO: Write your code here, recruit!\n    fmt.Println(\"Challenge started!\")\n}}\n\n// helperFunction - Break it down into manageable pieces!\n// Purpose: Add any helper functions you need\nfunc helperFunction() {{\n    // TODO: Implement helper logic\n}}\n\n// {SIGN_OFF}\n")
      },
      "Rust": {
        "extension": ".rs",
        "comment": "//",
        "body": format!("\n// main - This is your entry point!\n// Purpose: Implement the challenge requirements here\nfn main() {{\n    // TODO: Write your code here, recruit!\n    println!(\"Challenge started!\");\n}}\n\n// helper_function - Break it down into manageable pieces!\n// Purpose: Add any helper functions you need\nfn helper_function() {{\n    // TODO: Implement helper logic\n}}\n\n// {SIGN_OFF}\n")
      },
      "C": {
        "extension": ".c",
        "comment": "//",
        "body": format!("\n#include <stdio.h>\n\n// main - This is your entry point!\n// Purpose: Implement the challenge requirements here\nint main() {{\n    // TODO: Write your code here, recruit!\n    printf(\"Challenge started!\\n\");\n\n    return 0;\n}}\n\n// helperFunction - Break it down into manageable pieces!\n// Purpose: Add any helper functions you need\nvoid helperFunction() {{\n    // TODO: Implement helper logic\n}}\n\n// {SIGN_OFF}\n")
      },
      "C++": {
        "extension": ".cpp",
        "comment": "//",
        "body": format!("\n#include <iostream>\nusing namespace std;\n\n// main - This is your entry point!\n// Purpose: Implement the challenge requirements here\nint main() {{\n    // TODO: Write your code here, recruit!\n    cout << \"Challenge started!\" << endl;\n\n    return 0;\n}}\n\n// helperFunction - Break it down into manageable pieces!\n// Purpose: Add any helper functions you need\nvoid helperFunction() {{\n    // TODO: Implement helper logic\n}}\n\n// {SIGN_OFF}\n")
      },
      "C#": {
        "extension": ".cs",
        "comment": "//",
        "body": format!("\nusing System;\n\nclass TuxChallenge\n{{\n    // Main - This is your entry point!\n    // Purpose: Implement the challenge requirements here\n    static void Main()\n    {{\n        // TODO: Write your code here, recruit!\n        Console.WriteLine(\"Challenge started!\");\n    }}\n\n    // HelperFunction - Break it down into manageable pieces!\n    // Purpose: Add any helper functions you need\n    static void HelperFunction()\n    {{\n        // TODO: Implement helper logic\n    }}\n}}\n\n// {SIGN_OFF}\n")
      },
      "Assembly": {
        "extension": ".asm",
        "comment": ";",
        "body": format!("\nsection .data\n    ; Data section - Define your variables here\n    msg db 'Challenge started!', 0xA\n    len equ $ - msg\n\nsection .text\n    global _start\n\n; Main entry point\n; Purpose: Implement the challenge requirements here\n_start:\n    ; TODO: Write your code here, recruit!\n\n    ; Exit program\n    mov eax, 1\n    xor ebx, ebx\n    int 0x80\n\n; Helper function - Break it down into manageable pieces!\n; Purpose: Add any helper functions you need\nhelper_function:\n    ; TODO: Implement helper logic\n    ret\n\n; {SIGN_OFF}\n")
      },
      "LOLCODE": {
        "extension": ".lol",
        "comment": "BTW",
        "body": format!("\nHAI 1.2\n    CAN HAS STDIO?\n\n    BTW Main function - This is your entry point!\n    BTW Purpose: Implement the challenge requirements here\n\n    VISIBLE \"Challenge started!\"\n\n    BTW TODO: Write your code here, recruit!\n\n    BTW Helper section - Break it down!\n    BTW Purpose: Add any helper logic you need\n\nKTHXBYE\n\nBTW {SIGN_OFF}\n")
      },
      "Holy C": { "extension": ".hc", "comment": "//" },
      "INTERCAL": { "extension": ".i", "comment": "NOTE" },
      "Shakespeare": { "extension": ".spl", "comment": "" },
      "Rockstar": { "extension": ".rock", "comment": "(" }
    }
  })
}
